pub mod hours;
pub mod range;
pub mod wages;
