mod clock_tests;
mod parse_tests;
