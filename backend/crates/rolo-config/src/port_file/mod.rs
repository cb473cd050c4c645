pub mod port_file_info;

pub use port_file_info::PortFileInfo;
