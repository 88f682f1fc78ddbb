pub mod sut;
