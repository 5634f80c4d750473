pub mod venue_api_repo;
