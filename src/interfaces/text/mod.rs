pub mod trace_renderer;
