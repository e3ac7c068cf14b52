pub mod step_line;
