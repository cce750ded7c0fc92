// Application Layer - Use cases over the domain

pub mod front_desk;

pub use front_desk::FrontDesk;
