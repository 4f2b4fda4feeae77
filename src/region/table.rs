//! Static region and postal-code tables.
//!
//! Immutable process-wide data: US states, DC and inhabited territories with
//! their capital (or principal city) postal code, plus curated secondary
//! postal codes for the larger states.

/// `(code, name, primary postal code)` for every supported region.
pub(crate) const REGIONS: &[(&str, &str, &str)] = &[
    ("AL", "Alabama", "36104"),
    ("AK", "Alaska", "99801"),
    ("AZ", "Arizona", "85003"),
    ("AR", "Arkansas", "72201"),
    ("CA", "California", "95814"),
    ("CO", "Colorado", "80202"),
    ("CT", "Connecticut", "06103"),
    ("DE", "Delaware", "19901"),
    ("DC", "District of Columbia", "20001"),
    ("FL", "Florida", "32301"),
    ("GA", "Georgia", "30303"),
    ("HI", "Hawaii", "96813"),
    ("ID", "Idaho", "83702"),
    ("IL", "Illinois", "62701"),
    ("IN", "Indiana", "46204"),
    ("IA", "Iowa", "50309"),
    ("KS", "Kansas", "66603"),
    ("KY", "Kentucky", "40601"),
    ("LA", "Louisiana", "70802"),
    ("ME", "Maine", "04330"),
    ("MD", "Maryland", "21401"),
    ("MA", "Massachusetts", "02108"),
    ("MI", "Michigan", "48933"),
    ("MN", "Minnesota", "55102"),
    ("MS", "Mississippi", "39201"),
    ("MO", "Missouri", "65101"),
    ("MT", "Montana", "59601"),
    ("NE", "Nebraska", "68508"),
    ("NV", "Nevada", "89701"),
    ("NH", "New Hampshire", "03301"),
    ("NJ", "New Jersey", "08608"),
    ("NM", "New Mexico", "87501"),
    ("NY", "New York", "12207"),
    ("NC", "North Carolina", "27601"),
    ("ND", "North Dakota", "58501"),
    ("OH", "Ohio", "43215"),
    ("OK", "Oklahoma", "73102"),
    ("OR", "Oregon", "97301"),
    ("PA", "Pennsylvania", "17101"),
    ("RI", "Rhode Island", "02903"),
    ("SC", "South Carolina", "29201"),
    ("SD", "South Dakota", "57501"),
    ("TN", "Tennessee", "37219"),
    ("TX", "Texas", "78701"),
    ("UT", "Utah", "84111"),
    ("VT", "Vermont", "05602"),
    ("VA", "Virginia", "23219"),
    ("WA", "Washington", "98501"),
    ("WV", "West Virginia", "25301"),
    ("WI", "Wisconsin", "53703"),
    ("WY", "Wyoming", "82001"),
    ("AS", "American Samoa", "96799"),
    ("GU", "Guam", "96910"),
    ("MP", "Northern Mariana Islands", "96950"),
    ("PR", "Puerto Rico", "00901"),
    ("VI", "U.S. Virgin Islands", "00802"),
];

/// Curated secondary postal codes (major metro areas), tried after the primary.
///
/// Entries may repeat the primary; the selector drops duplicates.
pub(crate) const SECONDARY_POSTAL: &[(&str, &[&str])] = &[
    ("AZ", &["85701", "85201"]),
    ("CA", &["90012", "94103", "92101", "95113"]),
    ("CO", &["80903"]),
    ("FL", &["33130", "32801", "33602"]),
    ("GA", &["31401"]),
    ("IL", &["60601", "60602"]),
    ("MA", &["01608"]),
    ("MI", &["48226", "49503"]),
    ("NC", &["28202"]),
    ("NJ", &["07102"]),
    ("NY", &["10001", "14202", "12207"]),
    ("OH", &["44113", "45202"]),
    ("PA", &["19103", "15222", "17101"]),
    ("TN", &["38103"]),
    ("TX", &["77002", "75201", "78205"]),
    ("VA", &["23510"]),
    ("WA", &["98101", "99201"]),
];
