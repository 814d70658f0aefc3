// Adapters layer: concrete implementations for external systems (csv file, remote list, registry api).

pub mod csv_file;
pub mod registry;
pub mod remote_list;
