//! Delimited text input and output.
//!
//! Input: a header line, then one `x,y` record per line. Output: a header
//! line `index`, then one city index per line in visiting order.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{City, Tour};

/// Reads cities from `x,y` records following a header line.
///
/// Blank lines are skipped. Every record must have exactly two finite numeric
/// fields.
///
/// # Examples
///
/// ```
/// use u_tsp::io::read_cities;
///
/// let cities = read_cities("x,y\n0,0\n3.5,4\n".as_bytes()).unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities[1].x(), 3.5);
/// ```
pub fn read_cities<R: Read>(reader: R) -> Result<Vec<City>> {
    let reader = BufReader::new(reader);
    let mut cities = Vec::new();
    let mut saw_header = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !saw_header {
            saw_header = true;
            continue;
        }
        cities.push(parse_record(line, idx + 1)?);
    }

    if cities.is_empty() {
        return Err(Error::invalid_input("no cities provided"));
    }
    Ok(cities)
}

/// Reads cities from a file.
pub fn read_cities_from_path(path: impl AsRef<Path>) -> Result<Vec<City>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::invalid_input(format!("failed to open {}: {e}", path.display()))
    })?;
    read_cities(file)
}

fn parse_record(line: &str, line_no: usize) -> Result<City> {
    let mut it = line.split(',');
    let x_s = it
        .next()
        .ok_or_else(|| Error::invalid_input(format!("line {line_no}: missing x")))?;
    let y_s = it
        .next()
        .ok_or_else(|| Error::invalid_input(format!("line {line_no}: missing y")))?;
    if it.next().is_some() {
        return Err(Error::invalid_input(format!(
            "line {line_no}: expected 'x,y' but got extra fields: {line}"
        )));
    }

    let x = parse_coord(x_s, "x", line_no)?;
    let y = parse_coord(y_s, "y", line_no)?;
    Ok(City::new(x, y))
}

fn parse_coord(raw: &str, name: &str, line_no: usize) -> Result<f64> {
    let v: f64 = raw.trim().parse().map_err(|_| {
        Error::invalid_input(format!("line {line_no}: invalid {name}: {}", raw.trim()))
    })?;
    if !v.is_finite() {
        return Err(Error::invalid_input(format!(
            "line {line_no}: {name} must be finite, got {v}"
        )));
    }
    Ok(v)
}

/// Formats a tour as `index` followed by one index per line.
///
/// # Examples
///
/// ```
/// use u_tsp::io::format_tour;
/// use u_tsp::models::Tour;
///
/// assert_eq!(format_tour(&Tour::new(vec![2, 0, 1])), "index\n2\n0\n1");
/// ```
pub fn format_tour(tour: &Tour) -> String {
    let mut out = String::from("index");
    for c in tour.as_slice() {
        out.push('\n');
        out.push_str(&c.to_string());
    }
    out
}

/// Writes a formatted tour followed by a newline.
pub fn write_tour<W: Write>(mut writer: W, tour: &Tour) -> Result<()> {
    writeln!(writer, "{}", format_tour(tour))?;
    writer.flush()?;
    Ok(())
}

/// Writes a formatted tour to a file, replacing it if present.
pub fn write_tour_to_path(path: impl AsRef<Path>, tour: &Tour) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_tour(BufWriter::new(file), tour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cities() {
        let cities = read_cities("x,y\n214.98,762.69\n1222.0,229.3\n\n-3,4\n".as_bytes())
            .expect("parse");
        assert_eq!(cities.len(), 3);
        assert_eq!(cities[0], City::new(214.98, 762.69));
        assert_eq!(cities[2], City::new(-3.0, 4.0));
    }

    #[test]
    fn test_read_cities_trims_whitespace_and_crlf() {
        let cities = read_cities("x,y\r\n 1 , 2 \r\n".as_bytes()).expect("parse");
        assert_eq!(cities, vec![City::new(1.0, 2.0)]);
    }

    #[test]
    fn test_read_rejects_empty() {
        let err = read_cities("".as_bytes()).expect_err("empty");
        assert!(err.to_string().contains("no cities provided"));
        let err = read_cities("x,y\n".as_bytes()).expect_err("header only");
        assert!(err.to_string().contains("no cities provided"));
    }

    #[test]
    fn test_read_rejects_missing_field() {
        let err = read_cities("x,y\n1,2\n3\n".as_bytes()).expect_err("missing y");
        assert!(err.to_string().contains("line 3: missing y"));
    }

    #[test]
    fn test_read_rejects_extra_field() {
        let err = read_cities("x,y\n1,2,3\n".as_bytes()).expect_err("extra");
        assert!(err.to_string().contains("extra fields"));
    }

    #[test]
    fn test_read_rejects_non_numeric_and_non_finite() {
        let err = read_cities("x,y\na,2\n".as_bytes()).expect_err("bad x");
        assert!(err.to_string().contains("invalid x: a"));
        let err = read_cities("x,y\n1,inf\n".as_bytes()).expect_err("inf y");
        assert!(err.to_string().contains("y must be finite"));
    }

    #[test]
    fn test_format_tour() {
        assert_eq!(format_tour(&Tour::new(vec![0, 2, 1])), "index\n0\n2\n1");
        assert_eq!(format_tour(&Tour::identity(0)), "index");
    }

    #[test]
    fn test_write_tour() {
        let mut buf = Vec::new();
        write_tour(&mut buf, &Tour::new(vec![1, 0])).expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "index\n1\n0\n");
    }

    #[test]
    fn test_path_round_trip() {
        let dir = std::env::temp_dir().join(format!("u-tsp-io-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("mkdir");
        let input = dir.join("input.csv");
        std::fs::write(&input, "x,y\n0,0\n1,1\n").expect("write input");
        assert_eq!(read_cities_from_path(&input).expect("read").len(), 2);

        let output = dir.join("out.csv");
        write_tour_to_path(&output, &Tour::new(vec![1, 0])).expect("write");
        assert_eq!(
            std::fs::read_to_string(&output).expect("read output"),
            "index\n1\n0\n"
        );
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = read_cities_from_path("/definitely/not/here.csv").expect_err("missing");
        assert!(err.to_string().contains("failed to open"));
    }
}
