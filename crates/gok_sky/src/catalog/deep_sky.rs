/// Popular non-computed targets offered as journal suggestions.
pub const COMMON_DEEP_SKY_OBJECTS: [&str; 8] = [
    "Andromeda Galaksisi (M31)",
    "Orion Bulutsusu (M42)",
    "Ülker (Pleiades - M45)",
    "Samanyolu Merkezi",
    "Uluslararası Uzay İstasyonu (ISS)",
    "Starlink Uyduları",
    "Kayan Yıldız (Meteor)",
    "Kuzey Tacı (Corona Borealis)",
];
