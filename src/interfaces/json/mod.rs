pub mod trace_writer;
