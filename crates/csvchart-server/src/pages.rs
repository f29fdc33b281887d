// File: crates/csvchart-server/src/pages.rs
// Summary: Static HTML for the upload form and the column reference page.

pub const HOME: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>CSV Chart</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; }
        .container { max-width: 800px; margin: 0 auto; }
        .upload-form { border: 2px dashed #ccc; padding: 20px; text-align: center; margin: 20px 0; }
        .form-group { margin: 10px 0; }
        label { display: inline-block; width: 140px; font-weight: bold; }
        select, input[type="text"] { width: 200px; padding: 5px; }
        button { padding: 10px 20px; background: #516b91; color: white; border: none; cursor: pointer; }
        button:hover { background: #3d5273; }
    </style>
</head>
<body>
    <div class="container">
        <h1>CSV Chart</h1>
        <p>Upload a CSV export (for example from an Oura ring) and plot one column against another.
           See the <a href="/info">column reference</a> for common column names.</p>

        <form action="/upload" method="post" enctype="multipart/form-data" class="upload-form">
            <h3>Upload CSV File</h3>
            <input type="file" name="csvfile" accept=".csv" required>

            <h4>Chart Configuration</h4>
            <div class="form-group">
                <label for="chartType">Chart Type:</label>
                <select name="chartType" id="chartType">
                    <option value="line">Line Chart</option>
                    <option value="bar">Bar Chart</option>
                </select>
            </div>
            <div class="form-group">
                <label for="xColumn">X-Axis Column:</label>
                <input type="text" name="xColumn" id="xColumn" placeholder="e.g., date" required>
            </div>
            <div class="form-group">
                <label for="yColumn">Y-Axis Column:</label>
                <input type="text" name="yColumn" id="yColumn" placeholder="e.g., sleep_score" required>
            </div>
            <div class="form-group">
                <label for="title">Chart Title:</label>
                <input type="text" name="title" id="title" placeholder="defaults to Y vs X">
            </div>
            <div class="form-group">
                <label for="format">Output:</label>
                <select name="format" id="format">
                    <option value="html">Web page</option>
                    <option value="svg">SVG image</option>
                    <option value="json">JSON data</option>
                </select>
            </div>

            <button type="submit">Generate Chart</button>
        </form>
    </div>
</body>
</html>
"#;

/// Common Oura export columns: (name, description, data type).
pub const COLUMNS: &[(&str, &str, &str)] = &[
    ("date", "Date of measurement", "String (YYYY-MM-DD)"),
    ("sleep_score", "Overall sleep quality score (0-100)", "Numeric"),
    ("total_sleep_duration", "Total sleep time in seconds", "Numeric"),
    ("efficiency", "Sleep efficiency percentage", "Numeric"),
    ("restfulness", "Sleep restfulness score", "Numeric"),
    ("rem_sleep_duration", "REM sleep duration in seconds", "Numeric"),
    ("deep_sleep_duration", "Deep sleep duration in seconds", "Numeric"),
    ("light_sleep_duration", "Light sleep duration in seconds", "Numeric"),
    ("activity_score", "Daily activity score (0-100)", "Numeric"),
    ("steps", "Daily step count", "Numeric"),
    ("equivalent_walking_distance", "Walking distance in meters", "Numeric"),
    ("total_calories", "Total calories burned", "Numeric"),
    ("active_calories", "Active calories burned", "Numeric"),
    ("readiness_score", "Readiness score (0-100)", "Numeric"),
    ("temperature_deviation", "Body temperature deviation", "Numeric"),
    ("average_heart_rate", "Average heart rate (BPM)", "Numeric"),
    ("lowest_heart_rate", "Lowest heart rate (BPM)", "Numeric"),
];

/// Column reference page built from [`COLUMNS`].
pub fn info() -> String {
    let rows: String = COLUMNS
        .iter()
        .map(|(name, desc, ty)| format!("            <tr><td>{name}</td><td>{desc}</td><td>{ty}</td></tr>\n"))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>CSV Column Reference</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; }}
        .container {{ max-width: 800px; margin: 0 auto; }}
        table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
        th, td {{ border: 1px solid #ddd; padding: 12px; text-align: left; }}
        th {{ background-color: #f2f2f2; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Common Columns</h1>
        <p><a href="/">&larr; Back to Upload</a></p>
        <table>
            <tr><th>Column Name</th><th>Description</th><th>Data Type</th></tr>
{rows}        </table>

        <h2>Usage Tips</h2>
        <ul>
            <li>Use <strong>date</strong> as X-axis for time series data</li>
            <li>Numeric columns work best for the Y-axis (scores, durations, counts)</li>
            <li>Column names are case-insensitive</li>
            <li>Rows with a missing or non-numeric Y value are skipped</li>
        </ul>
    </div>
</body>
</html>
"#
    )
}
