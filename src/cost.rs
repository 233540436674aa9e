use std::{
    fmt::Debug,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub},
};

use num::Zero;

pub trait Cost:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Sum
    + Neg<Output = Self>
    + Zero
    + Debug
{
}

macro_rules! impl_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {}
        )*
    };
}

impl_cost!(i8, i16, i32, i64, i128, isize, f32, f64);
