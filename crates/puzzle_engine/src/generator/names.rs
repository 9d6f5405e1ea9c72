//! Fixed name pools for catalog generation.
//!
//! These pools are part of the deterministic output: indexing into them is
//! driven by seeded draws, so reordering or renaming entries changes every
//! generated catalog.

/// Decoy name pool. Decoy `i` uses `PRODUCT_NAMES[i % len]`, with a ` v2`,
/// ` v3`, ... suffix once the pool wraps.
pub(crate) const PRODUCT_NAMES: [&str; 100] = [
    "Turbocharger Kit",
    "Carbon Fiber Spoiler",
    "Racing Brake Pads",
    "Performance Exhaust",
    "Nitrous Oxide System",
    "Coilover Suspension",
    "Cold Air Intake",
    "Racing Clutch",
    "Lightweight Flywheel",
    "Performance Headers",
    "Fuel Injectors",
    "ECU Tuner",
    "Racing Seats",
    "Harness Bar",
    "Roll Cage Kit",
    "Racing Wheel",
    "Quick Release Hub",
    "Shift Knob",
    "Short Shifter",
    "Strut Tower Brace",
    "Sway Bar Kit",
    "Control Arms",
    "Tie Rod Ends",
    "Ball Joints",
    "Wheel Bearings",
    "Axle Shafts",
    "Differential",
    "Limited Slip Diff",
    "Transmission Mount",
    "Engine Mount",
    "Oil Cooler",
    "Radiator",
    "Intercooler",
    "Blow Off Valve",
    "Wastegate",
    "Boost Controller",
    "Wideband O2",
    "Gauge Pod",
    "Tachometer",
    "Boost Gauge",
    "Oil Pressure Gauge",
    "AFR Gauge",
    "Racing Helmet",
    "Racing Suit",
    "Racing Gloves",
    "Racing Shoes",
    "HANS Device",
    "Fire Extinguisher",
    "Window Net",
    "Tow Hook",
    "Splitter",
    "Diffuser",
    "Side Skirts",
    "Fender Flares",
    "Hood Pins",
    "Hood Scoop",
    "Vented Hood",
    "Carbon Trunk",
    "Rear Wing",
    "Canards",
    "Wheel Spacers",
    "Lug Nuts",
    "Valve Stems",
    "Tire Pressure Monitor",
    "Racing Slicks",
    "Rain Tires",
    "Compound Upgrade",
    "Wheel Set",
    "Forged Wheels",
    "Carbon Ceramic Brakes",
    "Big Brake Kit",
    "Brake Fluid",
    "Brake Lines",
    "Master Cylinder",
    "Pedal Box",
    "Throttle Body",
    "Camshaft",
    "Valve Springs",
    "Pistons",
    "Connecting Rods",
    "Crankshaft",
    "Head Gasket",
    "Timing Belt",
    "Water Pump",
    "Fuel Pump",
    "Fuel Rail",
    "Catch Can",
    "Oil Filter",
    "Air Filter",
    "Spark Plugs",
    "Ignition Coils",
    "Wiring Harness",
    "Data Logger",
    "Lap Timer",
    "Action Camera Mount",
    "LED Light Bar",
    "Underglow Kit",
    "Carbon Mirror Caps",
    "Aero Mirrors",
    "Sequential Signals",
];

/// Themed name pairs for the two solution items, hinting that they matter.
pub(crate) const SOLUTION_NAME_PAIRS: [(&str, &str); 5] = [
    ("Ghost Protocol ECU", "Phantom Turbo Kit"),
    ("Shadow Core Module", "Void Compression Kit"),
    ("Specter Fuel System", "Wraith Exhaust Package"),
    ("Eclipse Power Unit", "Nova Boost Controller"),
    ("Cipher Electronics", "Enigma Engine Block"),
];

/// Decoy category pool.
pub(crate) const CATEGORIES: [&str; 8] = [
    "Engine",
    "Suspension",
    "Brakes",
    "Exterior",
    "Interior",
    "Wheels",
    "Electronics",
    "Safety",
];

/// Stock keeping code prefixes for decoys.
pub(crate) const SKU_PREFIXES: [&str; 5] = ["SN", "PN", "RX", "TX", "MK"];
