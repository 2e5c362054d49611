//! Stable identifiers for the units and scales registered by
//! [`SiUnitsAndScales`](crate::SiUnitsAndScales).

// Base units
pub const METRE: &str = "metre";
pub const GRAM: &str = "gram";
pub const SECOND: &str = "second";
pub const AMPERE: &str = "ampere";
pub const KELVIN: &str = "kelvin";
pub const MOLE: &str = "mole";
pub const CANDELA: &str = "candela";

// Length
pub const KILOMETRE: &str = "kilometre";
pub const CENTIMETRE: &str = "centimetre";
pub const MILLIMETRE: &str = "millimetre";
pub const INCH: &str = "inch";
pub const FOOT: &str = "foot";
pub const MILE: &str = "mile";
pub const ASTRONOMICAL_UNIT: &str = "astronomical-unit";

// Mass
pub const KILOGRAM: &str = "kilogram";
pub const TONNE: &str = "tonne";

// Time
pub const MINUTE: &str = "minute";
pub const HOUR: &str = "hour";

// Area and volume
pub const SQUARE_METRE: &str = "square-metre";
pub const CUBIC_METRE: &str = "cubic-metre";
pub const LITRE: &str = "litre";

// Derived
pub const HERTZ: &str = "hertz";
pub const NEWTON: &str = "newton";
pub const JOULE: &str = "joule";
pub const PASCAL: &str = "pascal";
pub const WATT: &str = "watt";
pub const METRE_PER_SECOND: &str = "metre-per-second";
pub const KILOMETRE_PER_HOUR: &str = "kilometre-per-hour";

// Temperature units
pub const CELSIUS: &str = "degree-celsius";
pub const FAHRENHEIT: &str = "degree-fahrenheit";

// Scales
pub const KELVIN_SCALE: &str = "kelvin-scale";
pub const CELSIUS_SCALE: &str = "celsius-scale";
pub const FAHRENHEIT_SCALE: &str = "fahrenheit-scale";
