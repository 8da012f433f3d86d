//! Per-category lookups and the field-merge policy.

use std::net::IpAddr;
use std::path::Path;

use crate::error_handling::GeoError;

use super::source::{GeoSource, MmdbSource};
use super::types::{Asn, City, Country};

/// Reader over up to three independently-optional geolocation databases.
///
/// Obtained once via [`GeoReader::open`] and queried per address. The reader
/// is immutable after construction; sources cannot be added or removed, and
/// concurrent lookups need no locking.
pub struct GeoReader {
    country: Option<Box<dyn GeoSource>>,
    city: Option<Box<dyn GeoSource>>,
    asn: Option<Box<dyn GeoSource>>,
}

impl GeoReader {
    /// Opens the databases whose paths are given.
    ///
    /// Each path independently enables one lookup category; a `None` path
    /// leaves that category unconfigured, which is not an error. If any
    /// named database fails to open, the whole construction fails with
    /// [`GeoError::Open`].
    pub fn open(
        country_db: Option<&Path>,
        city_db: Option<&Path>,
        asn_db: Option<&Path>,
    ) -> Result<Self, GeoError> {
        let country = open_source(country_db)?;
        let city = open_source(city_db)?;
        let asn = open_source(asn_db)?;
        log::debug!(
            "Geo reader configured (country: {}, city: {}, asn: {})",
            country.is_some(),
            city.is_some(),
            asn.is_some()
        );
        Ok(Self { country, city, asn })
    }

    /// Looks up country data for an address.
    ///
    /// Returns a default record when no country source is configured. On a
    /// successful query, the name and ISO code are taken from the located
    /// country when non-empty, falling back to the registered country;
    /// `is_in_european_union` is set to the OR of both EU flags.
    pub fn country(&self, addr: IpAddr) -> Result<Country, GeoError> {
        let Some(source) = self.country.as_deref() else {
            return Ok(Country::default());
        };
        let raw = source.country(addr)?;

        let mut country = Country::default();
        if let Some(name) = non_empty(raw.country.name) {
            country.name = name;
        } else if let Some(name) = non_empty(raw.registered_country.name) {
            country.name = name;
        }
        if let Some(code) = non_empty(raw.country.iso_code) {
            country.iso_code = code;
        } else if let Some(code) = non_empty(raw.registered_country.iso_code) {
            country.iso_code = code;
        }
        country.is_in_european_union = Some(
            raw.country.is_in_european_union || raw.registered_country.is_in_european_union,
        );
        Ok(country)
    }

    /// Looks up city-level data for an address.
    ///
    /// Returns a default record when no city source is configured. Region
    /// name and code come from the first subdivision only; coordinates are
    /// set only for non-null, non-NaN source values.
    pub fn city(&self, addr: IpAddr) -> Result<City, GeoError> {
        let Some(source) = self.city.as_deref() else {
            return Ok(City::default());
        };
        let raw = source.city(addr)?;

        let mut city = City::default();
        if let Some(name) = non_empty(raw.name) {
            city.name = name;
        }
        if let Some(subdivision) = raw.subdivisions.into_iter().next() {
            if let Some(name) = non_empty(subdivision.name) {
                city.region_name = name;
            }
            if let Some(code) = non_empty(subdivision.iso_code) {
                city.region_code = code;
            }
        }
        if let Some(latitude) = raw.latitude.filter(|v| !v.is_nan()) {
            city.latitude = latitude;
        }
        if let Some(longitude) = raw.longitude.filter(|v| !v.is_nan()) {
            city.longitude = longitude;
        }
        if let Some(code) = non_empty(raw.postal_code) {
            city.postal_code = code;
        }
        if let Some(zone) = non_empty(raw.time_zone) {
            city.timezone = zone;
        }
        Ok(city)
    }

    /// Looks up autonomous-system data for an address.
    ///
    /// Returns a default record when no ASN source is configured. AS number
    /// zero is reserved and treated as absent.
    pub fn asn(&self, addr: IpAddr) -> Result<Asn, GeoError> {
        let Some(source) = self.asn.as_deref() else {
            return Ok(Asn::default());
        };
        let raw = source.asn(addr)?;

        let mut asn = Asn::default();
        if let Some(number) = raw.number.filter(|n| *n > 0) {
            asn.number = number;
        }
        if let Some(organization) = non_empty(raw.organization) {
            asn.organization = organization;
        }
        Ok(asn)
    }

    /// Reports whether the reader has no geographic sources.
    ///
    /// True iff neither a country nor a city source is configured. An
    /// ASN-only reader still counts as empty: ASN enrichment alone is not
    /// enough to make geo-enrichment worth attempting.
    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.city.is_none()
    }
}

fn open_source(path: Option<&Path>) -> Result<Option<Box<dyn GeoSource>>, GeoError> {
    path.map(|p| MmdbSource::open(p).map(|s| Box::new(s) as Box<dyn GeoSource>))
        .transpose()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
