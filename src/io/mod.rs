//! Reading cities and writing tours as delimited text.

mod csv;

pub use self::csv::{
    format_tour, read_cities, read_cities_from_path, write_tour, write_tour_to_path,
};
