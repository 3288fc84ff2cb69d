mod file_size;
mod findings;
mod strict_owners;
mod yaml_export;
