//! Pattern 3: Liskov Substitution
//!
//! Anything that works with a `Shape` should keep working when handed a
//! `Square`. It doesn't: a square's setters are coupled, so a caller that
//! changes only the height also changes the width.

pub trait Shape {
    fn width(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn height(&self) -> u32;
    fn set_height(&mut self, height: u32);

    /// Widened so that any pair of `u32` sides fits.
    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The substitutable way to ask "is this a square?".
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl Shape for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }

    pub fn side(&self) -> u32 {
        self.side
    }
}

// Both setters move the shared side. This is what breaks substitution.
impl Shape for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn set_width(&mut self, width: u32) {
        self.side = width;
    }

    fn height(&self) -> u32 {
        self.side
    }

    fn set_height(&mut self, height: u32) {
        self.side = height;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaReport {
    pub expected: u64,
    pub actual: u64,
}

impl AreaReport {
    pub fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

/// Sets the height to 10 and assumes the width is untouched.
pub fn use_it(shape: &mut dyn Shape) -> AreaReport {
    let width = shape.width();
    shape.set_height(10);

    let report = AreaReport {
        expected: u64::from(width) * 10,
        actual: shape.area(),
    };
    if !report.holds() {
        tracing::warn!(
            expected = report.expected,
            actual = report.actual,
            "area expectation broken"
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rectangle_honours_expectation() {
        let mut rectangle = Rectangle::new(2, 3);
        let report = use_it(&mut rectangle);

        assert_eq!(report, AreaReport { expected: 20, actual: 20 });
        assert!(report.holds());
        assert_eq!(rectangle.width(), 2);
    }

    #[test]
    fn test_square_breaks_expectation() {
        let mut square = Square::new(5);
        let report = use_it(&mut square);

        assert_eq!(report.expected, 50);
        assert_eq!(report.actual, 100);
        assert!(!report.holds());
        assert_eq!(square.side(), 10);
    }

    #[test]
    fn test_square_of_side_ten_is_accidentally_fine() {
        let report = use_it(&mut Square::new(10));
        assert!(report.holds());
    }

    #[test]
    fn test_large_sides_do_not_overflow() {
        let report = use_it(&mut Rectangle::new(500_000_000, 1));
        assert_eq!(report.expected, 5_000_000_000);
        assert!(report.holds());

        assert_eq!(Rectangle::new(70_000, 70_000).area(), 4_900_000_000);
        assert_eq!(Square::new(u32::MAX).area(), u64::from(u32::MAX).pow(2));
    }

    #[test]
    fn test_rectangle_is_square() {
        assert!(Rectangle::new(4, 4).is_square());
        assert!(!Rectangle::new(4, 5).is_square());
    }

    #[test]
    fn test_heterogeneous_shapes() {
        let mut shapes: Vec<Box<dyn Shape>> =
            vec![Box::new(Rectangle::new(3, 7)), Box::new(Square::new(3))];
        let holding: Vec<bool> = shapes
            .iter_mut()
            .map(|shape| use_it(shape.as_mut()).holds())
            .collect();
        assert_eq!(holding, [true, false]);
    }

    proptest! {
        #[test]
        fn test_square_stays_square(
            side in 0u32..1000,
            value in 0u32..1000,
            through_width in any::<bool>(),
        ) {
            let mut square = Square::new(side);
            if through_width {
                square.set_width(value);
            } else {
                square.set_height(value);
            }
            prop_assert_eq!(square.width(), square.height());
            prop_assert_eq!(square.width(), value);
        }

        #[test]
        fn test_area_never_overflows(width in any::<u32>(), height in any::<u32>()) {
            let rectangle = Rectangle::new(width, height);
            prop_assert_eq!(rectangle.area(), u64::from(width) * u64::from(height));

            let square = Square::new(width);
            prop_assert_eq!(square.area(), u64::from(width) * u64::from(width));
        }

        #[test]
        fn test_use_it_over_full_range(width in any::<u32>(), height in any::<u32>()) {
            let report = use_it(&mut Rectangle::new(width, height));
            prop_assert!(report.holds());
            prop_assert_eq!(report.expected, u64::from(width) * 10);

            let report = use_it(&mut Square::new(width));
            prop_assert_eq!(report.actual, 100);
            prop_assert_eq!(report.holds(), width == 10);
        }

        #[test]
        fn test_rectangle_setters_are_independent(
            width in 0u32..1000,
            height in 0u32..1000,
            value in 0u32..1000,
        ) {
            let mut rectangle = Rectangle::new(width, height);
            rectangle.set_height(value);
            prop_assert_eq!(rectangle.width(), width);
            prop_assert_eq!(rectangle.height(), value);
        }
    }
}
