pub mod max_speed_parser;
