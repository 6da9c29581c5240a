mod batch;
mod benchmark;
mod compatibility;
mod corpus;
mod determinism_json;
mod fix_loop;
