//! Conversion between network DTOs and domain types.
//!
//! Loading replays every section through [`Line::add_section`], so a file
//! that would break a line's topology is rejected with the same error a
//! live change would get.

use std::collections::HashMap;

use crate::domain::{Distance, Line, LineId, Section, Station, StationId};
use crate::planner::Lines;

use super::Network;
use super::error::NetworkError;
use super::types::{LineDto, NetworkFile, SectionDto, StationDto};

/// Convert a network description into a validated [`Network`].
pub fn convert_network(file: &NetworkFile) -> Result<Network, NetworkError> {
    let mut stations: HashMap<StationId, Station> = HashMap::with_capacity(file.stations.len());
    for dto in &file.stations {
        let id = StationId::new(dto.id);
        if stations
            .insert(id, Station::new(id, dto.name.clone()))
            .is_some()
        {
            return Err(NetworkError::DuplicateStation(id));
        }
    }

    let mut lines = Lines::default();
    for dto in &file.lines {
        let line = convert_line(dto, &stations)?;
        if lines.get(line.id()).is_some() {
            return Err(NetworkError::DuplicateLine(line.id()));
        }
        lines.push(line);
    }

    Ok(Network::new(stations.into_values(), lines))
}

/// Convert a single line, adding its sections in file order.
pub fn convert_line(
    dto: &LineDto,
    stations: &HashMap<StationId, Station>,
) -> Result<Line, NetworkError> {
    let id = LineId::new(dto.id);
    if dto.extra_charge == Some(0) {
        return Err(NetworkError::ZeroExtraCharge(id));
    }

    let mut sections = dto
        .sections
        .iter()
        .map(|section| convert_section(id, section, stations));

    let first = sections.next().ok_or(NetworkError::EmptyLine(id))??;
    let mut line = Line::new(id, dto.name.clone(), dto.extra_charge, first);

    for section in sections {
        line.add_section(section?)
            .map_err(|source| NetworkError::Topology { line: id, source })?;
    }

    Ok(line)
}

fn convert_section(
    line: LineId,
    dto: &SectionDto,
    stations: &HashMap<StationId, Station>,
) -> Result<Section, NetworkError> {
    let up = StationId::new(dto.up);
    let down = StationId::new(dto.down);

    for station in [up, down] {
        if !stations.contains_key(&station) {
            return Err(NetworkError::UnknownStation { line, station });
        }
    }

    let distance = Distance::new(dto.distance)
        .map_err(|source| NetworkError::InvalidDistance { line, source })?;

    Section::new(up, down, distance).map_err(|source| NetworkError::InvalidSection { line, source })
}

/// Describe `network` as a file, with stations sorted by id and each line's
/// sections in travel order.
pub fn to_network_file(network: &Network) -> NetworkFile {
    let mut stations: Vec<StationDto> = network
        .stations()
        .map(|s| StationDto {
            id: s.id.get(),
            name: s.name.clone(),
        })
        .collect();
    stations.sort_by_key(|s| s.id);

    let lines = network.lines().iter().map(line_to_dto).collect();

    NetworkFile { stations, lines }
}

fn line_to_dto(line: &Line) -> LineDto {
    let stops = line.stations();
    let sections = stops
        .windows(2)
        .filter_map(|pair| line.sections().section_starting_at(pair[0]))
        .map(|s| SectionDto {
            up: s.up().get(),
            down: s.down().get(),
            distance: s.distance().get(),
        })
        .collect();

    LineDto {
        id: line.id().get(),
        name: line.name().to_string(),
        extra_charge: line.extra_charge(),
        sections,
    }
}
