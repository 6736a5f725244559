//! Redux Toolkit slice template

/// Render a `createSlice` module for `name`
///
/// The slice identifier and slice name are the lowercased `name`. State holds a
/// single `data` array replaced wholesale by the `setData` reducer.
pub fn slice_template(name: &str) -> String {
    let lower = name.to_lowercase();
    format!(
        r#"
import {{ createSlice }} from '@reduxjs/toolkit';

const initialState = {{
    data: [],
}};

const {lower}Slice = createSlice({{
    name: '{lower}',
    initialState,
    reducers: {{
        setData: (state, action) => {{
            state.data = action.payload;
        }}
    }}
}});

export const {{ setData }} = {lower}Slice.actions;
export default {lower}Slice.reducer;
"#
    )
}
