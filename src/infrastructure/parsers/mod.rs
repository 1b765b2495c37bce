pub mod csv_parser;
