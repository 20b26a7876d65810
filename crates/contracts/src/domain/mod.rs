pub mod a001_parameter;
