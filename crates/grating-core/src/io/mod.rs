pub mod csv;
pub mod image_io;
