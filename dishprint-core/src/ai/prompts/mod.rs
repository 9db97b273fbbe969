pub mod describe_dish;
