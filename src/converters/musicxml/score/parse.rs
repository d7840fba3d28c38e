use super::model::*;
use super::{MxError, Result};
use crate::models::Mode;
use roxmltree::{Document as XmlDocument, Node, ParsingOptions};
use std::path::Path;

/// Double sharp / double flat
const MAX_ROOT_ALTER: f32 = 2.0;

/// Parse a MusicXML `score-partwise` document into the summary model
pub fn parse_score(xml: &str) -> Result<Score> {
    // exported MusicXML nearly always carries a <!DOCTYPE score-partwise ...>
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = XmlDocument::parse_with_options(xml, options)
        .map_err(|e| MxError::Xml(e.to_string()))?;
    let root = doc.root_element();

    match root.tag_name().name() {
        "score-partwise" => parse_score_partwise(root),
        "score-timewise" => Err(MxError::UnsupportedFormat(
            "score-timewise (use score-partwise instead)".to_string(),
        )),
        other => Err(MxError::Invalid(format!(
            "root element <{}>, expected <score-partwise>",
            other
        ))),
    }
}

/// Read and parse a MusicXML file
pub fn parse_score_file(path: &Path) -> Result<Score> {
    let xml = std::fs::read_to_string(path).map_err(|source| MxError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("read {} bytes from {}", xml.len(), path.display());
    parse_score(&xml)
}

fn parse_score_partwise(root: Node) -> Result<Score> {
    let work_title = child(root, "work")
        .and_then(|work| child_text(work, "work-title"))
        .map(str::to_string);
    let movement_title = child_text(root, "movement-title").map(str::to_string);

    let part_list = match child(root, "part-list") {
        Some(list) => parse_part_list(list),
        None => {
            log::warn!("score has no <part-list>");
            Vec::new()
        }
    };

    let mut parts = Vec::new();
    for (index, part_node) in children(root, "part").enumerate() {
        let id = part_node
            .attribute("id")
            .map(str::to_string)
            .unwrap_or_else(|| format!("P{}", index + 1));
        let measures = children(part_node, "measure")
            .map(parse_measure)
            .collect::<Result<Vec<_>>>()?;
        log::debug!("part {}: {} measures", id, measures.len());
        parts.push(Part { id, measures });
    }

    Ok(Score {
        work_title,
        movement_title,
        part_list,
        parts,
    })
}

fn parse_part_list(list: Node) -> Vec<ScorePart> {
    children(list, "score-part")
        .map(|score_part| ScorePart {
            id: score_part.attribute("id").unwrap_or_default().to_string(),
            name: child_text(score_part, "part-name").unwrap_or_default().to_string(),
        })
        .collect()
}

fn parse_measure(measure_node: Node) -> Result<Measure> {
    let mut measure = Measure {
        number: measure_node.attribute("number").unwrap_or_default().to_string(),
        ..Default::default()
    };

    for node in measure_node.children().filter(|n| n.is_element()) {
        match node.tag_name().name() {
            "note" => {
                measure.note_count += 1;
                if child(node, "rest").is_some() {
                    measure.rest_count += 1;
                }
            }
            "harmony" => measure.harmonies.push(parse_harmony(node)),
            "attributes" => {
                // the first <key> of a measure is its key
                if let Some(key_node) = child(node, "key") {
                    let key = parse_key(key_node, &measure.number)?;
                    if measure.key.is_none() {
                        measure.key = key;
                    }
                }
            }
            _ => {}
        }
    }

    Ok(measure)
}

fn parse_harmony(node: Node) -> Harmony {
    let root = child(node, "root");
    let root_step = root
        .and_then(|r| child_text(r, "root-step"))
        .unwrap_or_default()
        .to_string();

    // <root-alter> is a decimal; microtones round to the nearest semitone
    let root_alter = match root.and_then(|r| child_text(r, "root-alter")) {
        Some(text) => match text.parse::<f32>() {
            Ok(alter) if (-MAX_ROOT_ALTER..=MAX_ROOT_ALTER).contains(&alter.round()) => {
                alter.round() as i8
            }
            Ok(_) => {
                log::warn!("ignoring out-of-range root-alter '{}'", text);
                0
            }
            Err(_) => {
                log::warn!("ignoring non-numeric root-alter '{}'", text);
                0
            }
        },
        None => 0,
    };

    Harmony {
        root_step,
        root_alter,
        kind: child_text(node, "kind").unwrap_or_default().to_string(),
    }
}

/// Traditional key signatures only; non-traditional keys (no <fifths>) yield None
fn parse_key(key_node: Node, measure_number: &str) -> Result<Option<KeyAttribute>> {
    let Some(text) = child_text(key_node, "fifths") else {
        log::debug!("measure {}: <key> without <fifths>, skipping", measure_number);
        return Ok(None);
    };

    let fifths = text.parse::<i32>().map_err(|_| {
        MxError::Invalid(format!(
            "measure {}: <fifths> value '{}' is not an integer",
            measure_number, text
        ))
    })?;
    let mode = child_text(key_node, "mode").map(Mode::from).unwrap_or_default();

    Ok(Some(KeyAttribute { fifths, mode }))
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.tag_name().name() == name)
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.tag_name().name() == name)
}

/// Trimmed text of a child element, None when absent or empty
fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child(node, name)
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
