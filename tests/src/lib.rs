#[cfg(test)]
mod registry;
#[cfg(test)]
mod resolve;
#[cfg(test)]
mod utils;
