// Module declarations for all test files in the resolve directory
mod fixture_paths;
mod review_request;
