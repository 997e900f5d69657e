use core::cmp::Ordering;

use crate::Unsigned;

impl<const L: usize> Unsigned<L> {
    /// Magnitude comparison, by way of subtraction: a borrow means
    /// `self < other`, otherwise the difference decides between equal
    /// and greater.
    ///
    /// Costs one full subtraction, even if the leading digits differ.
    pub fn compare(&self, other: &Self) -> Ordering {
        let (borrow, difference) = self.borrowing_sub(other);
        if borrow != 0 {
            Ordering::Less
        } else if difference.is_zero() {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}
