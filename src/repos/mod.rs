pub mod drink_repo;
