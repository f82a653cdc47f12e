pub mod request_reader;
pub mod route_writer;
