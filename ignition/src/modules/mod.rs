pub mod car_rental;
