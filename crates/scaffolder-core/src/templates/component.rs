//! React view component template

/// Render a function component whose heading and default export are both `identifier`
///
/// The caller passes the already-suffixed identifier (e.g. `UsersList`).
/// Nothing is escaped.
pub fn component_template(identifier: &str) -> String {
    format!(
        r#"
import React from 'react';

const {identifier} = () => {{
    return (
        <div>
            <h2>{identifier}</h2>
        </div>
    );
}};

export default {identifier};
"#
    )
}
