use std::num::ParseIntError;

use tee::prelude::*;

#[derive(Debug)]
enum Error {
  BadPort(ParseIntError),
  PortOutOfRange(u16),
}

impl From<ParseIntError> for Error {
  fn from(e: ParseIntError) -> Self {
    Error::BadPort(e)
  }
}

fn parse_port(raw: &str) -> Result<u16, Error> {
  Ok(raw.parse::<u16>()?)
}

fn main() {
  simple_logger::init_with_level(log::Level::Info).unwrap();

  for raw in ["5683", "70000", "80"] {
    parse_port(raw).try_perform(|p| match *p {
                     | 0..=1023 => Err(Error::PortOutOfRange(*p)),
                     | _ => Ok(()),
                   })
                   .perform(|p| log::info!("{raw} parsed as port {p}"))
                   .perform_err(|e| log::error!("{raw} rejected: {e:?}"))
                   .sink(ignore);
  }

  // Option side: fall back to the default CoAP port for odd picks
  std::env::var("PORT").ok()
                       .perform_none(|| log::info!("PORT not set, using 5683"))
                       .pipe(|p| p.map(|p| p.parse::<u16>().unwrap_or(5683)))
                       .filter_or(5683, |p| *p % 2 == 0)
                       .perform(|p| log::info!("final port: {p}"))
                       .pipe(ignore);
}
