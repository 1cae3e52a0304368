mod cli_tests;
mod round_trip_cmd_tests;
