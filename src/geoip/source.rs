//! Database source abstraction.
//!
//! The merge policy in [`super::reader`] operates on owned raw records
//! produced by a narrow trait over the database backend, so the backend can
//! be stubbed in tests. [`MmdbSource`] is the production implementation on
//! top of `maxminddb`.

use std::net::IpAddr;
use std::path::Path;

use maxminddb::{geoip2, Reader};

use crate::error_handling::GeoError;

/// Raw country data as provided by one database source.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawCountry {
    /// Country where the address is believed to be located.
    pub country: RawCountryInfo,
    /// Country where the ISP has registered the address block.
    pub registered_country: RawCountryInfo,
}

/// Name, code, and EU membership of one country entity.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawCountryInfo {
    pub name: Option<String>,
    pub iso_code: Option<String>,
    pub is_in_european_union: bool,
}

/// Raw city data as provided by one database source.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawCity {
    pub name: Option<String>,
    pub subdivisions: Vec<RawSubdivision>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub postal_code: Option<String>,
    pub time_zone: Option<String>,
}

/// One subdivision (region/state) entry.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawSubdivision {
    pub name: Option<String>,
    pub iso_code: Option<String>,
}

/// Raw autonomous-system data as provided by one database source.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawAsn {
    pub number: Option<u32>,
    pub organization: Option<String>,
}

/// Narrow interface to one opened geolocation database.
///
/// An address not present in the database yields an empty raw record, not
/// an error; errors are reserved for failed reads.
pub(crate) trait GeoSource: Send + Sync {
    fn country(&self, addr: IpAddr) -> Result<RawCountry, GeoError>;
    fn city(&self, addr: IpAddr) -> Result<RawCity, GeoError>;
    fn asn(&self, addr: IpAddr) -> Result<RawAsn, GeoError>;
}

/// MaxMind database file opened through `maxminddb`.
pub(crate) struct MmdbSource {
    reader: Reader<Vec<u8>>,
}

impl MmdbSource {
    /// Opens the database at `path`, reading it fully into memory.
    pub(crate) fn open(path: &Path) -> Result<Self, GeoError> {
        let reader = Reader::open_readfile(path).map_err(|source| GeoError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "Opened geolocation database {} (build epoch {})",
            path.display(),
            reader.metadata.build_epoch
        );
        Ok(Self { reader })
    }
}

impl GeoSource for MmdbSource {
    fn country(&self, addr: IpAddr) -> Result<RawCountry, GeoError> {
        // maxminddb 0.27 API: lookup() returns a LookupResult; has_data()
        // distinguishes not-found from a decodable record
        let lookup = self.reader.lookup(addr)?;
        if !lookup.has_data() {
            return Ok(RawCountry::default());
        }
        let Some(record) = lookup.decode::<geoip2::Country>()? else {
            return Ok(RawCountry::default());
        };
        Ok(RawCountry {
            country: country_info(&record.country),
            registered_country: country_info(&record.registered_country),
        })
    }

    fn city(&self, addr: IpAddr) -> Result<RawCity, GeoError> {
        let lookup = self.reader.lookup(addr)?;
        if !lookup.has_data() {
            return Ok(RawCity::default());
        }
        let Some(record) = lookup.decode::<geoip2::City>()? else {
            return Ok(RawCity::default());
        };
        Ok(RawCity {
            name: record.city.names.english.map(str::to_owned),
            subdivisions: record
                .subdivisions
                .iter()
                .map(|subdivision| RawSubdivision {
                    name: subdivision.names.english.map(str::to_owned),
                    iso_code: subdivision.iso_code.map(str::to_owned),
                })
                .collect(),
            latitude: record.location.latitude,
            longitude: record.location.longitude,
            postal_code: record.postal.code.map(str::to_owned),
            time_zone: record.location.time_zone.map(str::to_owned),
        })
    }

    fn asn(&self, addr: IpAddr) -> Result<RawAsn, GeoError> {
        let lookup = self.reader.lookup(addr)?;
        if !lookup.has_data() {
            return Ok(RawAsn::default());
        }
        let Some(record) = lookup.decode::<geoip2::Asn>()? else {
            return Ok(RawAsn::default());
        };
        Ok(RawAsn {
            number: record.autonomous_system_number,
            organization: record.autonomous_system_organization.map(str::to_owned),
        })
    }
}

fn country_info(entity: &geoip2::country::Country<'_>) -> RawCountryInfo {
    RawCountryInfo {
        name: entity.names.english.map(str::to_owned),
        iso_code: entity.iso_code.map(str::to_owned),
        is_in_european_union: entity.is_in_european_union.unwrap_or(false),
    }
}
