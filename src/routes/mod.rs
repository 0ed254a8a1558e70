pub mod views;

pub use views::router;
