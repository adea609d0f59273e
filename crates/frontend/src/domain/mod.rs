pub mod a003_booking;
