use std::borrow::Cow;

use super::{Params, RouteName};
use crate::error::{NavigationError, PatternError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route path such as `/` or `/:id`.
///
/// A parameter matches exactly one non-empty segment. A single trailing slash is ignored on both
/// sides of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = (!path.is_empty()).then(|| path.strip_suffix('/').unwrap_or(path));
    path.into_iter().flat_map(|path| path.split('/'))
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_owned()));
        }

        let mut segments = Vec::new();
        for segment in split_segments(raw) {
            if let Some(name) = segment.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName(raw.to_owned()));
                }
                if segments.iter().any(|s| matches!(s, Segment::Param(p) if p == name)) {
                    return Err(PatternError::DuplicateParam {
                        pattern: raw.to_owned(),
                        param: name.to_owned(),
                    });
                }
                segments.push(Segment::Param(name.to_owned()));
            } else {
                segments.push(Segment::Static(segment.to_owned()));
            }
        }

        Ok(Self { raw: raw.to_owned(), segments })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_static(&self) -> bool {
        self.segments.iter().all(|segment| matches!(segment, Segment::Static(_)))
    }

    pub fn matches(&self, path: &str) -> Option<Params> {
        let mut parts = split_segments(path);
        let mut params = Params::default();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Static(value) => {
                    if value != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.insert(name.as_str(), decode(part));
                }
            }
        }

        parts.next().is_none().then_some(params)
    }

    pub(crate) fn build(&self, name: &RouteName, params: &Params) -> Result<String, NavigationError> {
        if self.segments.is_empty() {
            return Ok("/".to_owned());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(value) => path.push_str(value),
                Segment::Param(param) => {
                    let value = params.get(param).ok_or_else(|| NavigationError::MissingParam {
                        name: name.clone(),
                        param: param.clone(),
                    })?;
                    if value.is_empty() {
                        return Err(NavigationError::EmptyParam {
                            name: name.clone(),
                            param: param.clone(),
                        });
                    }
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }
        Ok(path)
    }
}

fn decode(part: &str) -> String {
    urlencoding::decode(part).map_or_else(|_| part.to_owned(), Cow::into_owned)
}
