pub mod shipment_test_repo;

pub use shipment_test_repo::ShipmentTestRepo;
