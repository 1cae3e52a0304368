mod printer_tests;
mod round_trip_property_tests;
mod space_tests;
mod tree_builder_tests;
mod utils;
