mod fuel_tests;
mod syntax_tests;
