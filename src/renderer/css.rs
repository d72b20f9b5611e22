// Fixed stylesheet for the generated page. Self-contained, no external assets.

pub const BACKGROUND: &str = "#2E3440";
pub const TITLE_COLOR: &str = "#5E81AC";
pub const ITEM_COLOR: &str = "#ECEFF4";

pub fn stylesheet() -> String {
    format!(
        r#"body {{
margin: 0;
font-family: 'Oswald', sans-serif;
height: 100%;
width: 100%;
background-color: {bg};
}}
h1 {{
text-align: center;
color: {title};
font-size: 70px;
margin-top: 20px;
margin-bottom: 20px;
font-weight: bold;
}}
h2 {{
text-align: center;
color: {title};
}}
ul {{
list-style-type: none;
margin: 0;
padding: 0;
text-align: center;
color: {item};
}}
a {{
display: block;
padding: 10px 0px;
text-decoration: none;
color: {item};
font-size: 1.2em;
}}
div {{
display: inline;
margin: 5px;
border-color: #FF0000;
border-width: 5px;
float: left;
}}
.container {{
display: flex;
width: 100%;
justify-content: space-evenly;
}}
"#,
        bg = BACKGROUND,
        title = TITLE_COLOR,
        item = ITEM_COLOR,
    )
}
