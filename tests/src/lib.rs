#[cfg(test)]
mod parking;
#[cfg(test)]
mod utils;
