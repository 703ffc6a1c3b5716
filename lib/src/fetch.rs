use image::{DynamicImage, ImageReader};
use log::debug;

use crate::error::Result;

// Some image hosts refuse requests carrying a library user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.149 Safari/537.36";

/// Loads and decodes the image behind `locator`, which is either an http(s)
/// URL or a local path. Fetch failures are not retried.
pub fn fetch(locator: &str) -> Result<DynamicImage> {
    if locator.starts_with("http://") || locator.starts_with("https://") {
        fetch_url(locator)
    } else {
        debug!("reading {}", locator);
        Ok(ImageReader::open(locator)?.decode()?)
    }
}

fn fetch_url(url: &str) -> Result<DynamicImage> {
    debug!("fetching {}", url);

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let bytes = client.get(url).send()?.error_for_status()?.bytes()?;

    Ok(image::load_from_memory(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            fetch("/no/such/image.png"),
            Err(Error::Io(_))
        ));
    }
}
