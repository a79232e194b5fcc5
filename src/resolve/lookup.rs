//! Finding requests by name

use crate::config::{EndpointGroup, GlobalConfig, Request};
use crate::errors::ResolutionError;

/// A request together with the group that owns it
#[derive(Debug, Clone, Copy)]
pub struct RequestRef<'a> {
    pub group_name: &'a str,
    pub group: &'a EndpointGroup,
    pub name: &'a str,
    pub request: &'a Request,
}

/// First request named `name`, scanning groups in document order
pub fn find_request_by_name<'a>(config: &'a GlobalConfig, name: &str) -> Option<RequestRef<'a>> {
    config.endpoints.iter().find_map(|(group_name, group)| {
        group
            .requests
            .get_key_value(name)
            .map(|(key, request)| RequestRef {
                group_name,
                group,
                name: key,
                request,
            })
    })
}

/// Request `name` inside the group `group_name`
pub fn find_request_in_group<'a>(
    config: &'a GlobalConfig,
    group_name: &str,
    name: &str,
) -> Result<RequestRef<'a>, ResolutionError> {
    let (group_key, group) = config
        .endpoints
        .get_key_value(group_name)
        .ok_or_else(|| ResolutionError::GroupNotFound { group: group_name.to_string() })?;

    let (key, request) = group
        .requests
        .get_key_value(name)
        .ok_or_else(|| ResolutionError::RequestNotFound { name: name.to_string() })?;

    Ok(RequestRef {
        group_name: group_key,
        group,
        name: key,
        request,
    })
}
