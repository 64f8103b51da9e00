pub mod a025_vehicle;
