pub mod occupation;
