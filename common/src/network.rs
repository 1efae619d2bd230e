pub mod eui64;
