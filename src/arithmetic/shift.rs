use crate::Unsigned;

impl<const L: usize> Unsigned<L> {
    /// Shift by whole digits towards the most significant end, i.e.
    /// multiply by $2^{32 \cdot \text{positions}}$ modulo $2^{32L}$.
    ///
    /// The digit at index `i + positions` moves to index `i`, the lowest
    /// `positions` digits become zero. Digits pushed past the top are lost.
    pub fn shift_digits_left(&mut self, positions: usize) {
        let positions = positions.min(L);
        let data = &mut self.0;

        data.copy_within(positions.., 0);
        data[L - positions..].fill(0);
    }

    pub fn shifted_digits_left(&self, positions: usize) -> Self {
        let mut shifted = self.clone();
        shifted.shift_digits_left(positions);
        shifted
    }
}

#[cfg(test)]
mod test {
    use crate::fixtures::*;

    #[test]
    fn zero_fills() {
        let mut x = U128::from_slice(&[1, 2, 3, 4]);
        x.shift_digits_left(1);
        assert_eq!(x.digits(), &[2, 3, 4, 0]);
        x.shift_digits_left(2);
        assert_eq!(x.digits(), &[4, 0, 0, 0]);
    }

    #[test]
    fn no_shift() {
        let x = U128::from_slice(&[1, 2, 3, 4]);
        assert_eq!(x.shifted_digits_left(0), x);
    }

    #[test]
    fn shifting_out_everything() {
        let x = U128::from_slice(&[1, 2, 3, 4]);
        assert!(x.shifted_digits_left(4).is_zero());
        assert!(x.shifted_digits_left(100).is_zero());
    }

    #[test]
    fn multiplies_by_powers_of_the_base() {
        let x = U4096::from_hex("abcdef").unwrap();
        assert_eq!(x.shifted_digits_left(3).to_hex(), format!("abcdef{}", "0".repeat(24)));
        assert_eq!(x.shifted_digits_left(127).digits()[0], 0xabcdef);
    }
}
