/// Short, Pro Tools-friendly names keyed by class-name substring.
///
/// Lookup is a linear scan in this order and the first key contained in a
/// class name wins, so overlapping keys ("Singing" / "Singing voice") resolve
/// to whichever is listed first. Matching is case-sensitive.
pub const SHORT_NAMES: &[(&str, &str)] = &[
    // Drums & percussion
    ("Drum", "Drum Loop"),
    ("Percussion", "Perc Loop"),
    ("Cymbal", "Cymbal Hit"),
    ("Snare drum", "Snare"),
    ("Bass drum", "Kick Drum"),
    ("Hi-hat", "Hi-hat"),
    ("Tom", "Tom"),
    ("Floor tom", "Floor Tom"),
    ("Crash cymbal", "Crash Cymbal"),
    ("Ride cymbal", "Ride Cymbal"),
    ("Timpani", "Timpani"),
    ("Congas", "Congas"),
    ("Bongo", "Bongo"),
    ("Maracas", "Maracas"),
    ("Shaker", "Shaker"),
    ("Claves", "Claves"),
    ("Tambourine", "Tambourine"),
    // Keyboards
    ("Piano", "Piano Chords"),
    ("Electric piano", "Electric Piano"),
    ("Organ", "Organ"),
    ("Synthesizer", "Synth Lead"),
    ("Harpsichord", "Harpsichord"),
    ("Clavinet", "Clavinet"),
    ("Accordion", "Accordion"),
    ("Keytar", "Keytar"),
    // Vocals
    ("Male speech", "Male Voice"),
    ("Female speech", "Female Voice"),
    ("Male singing", "Male Vocal"),
    ("Female singing", "Female Vocal"),
    ("Singing", "Singing"),
    ("Singing voice", "Vocal"),
    ("Choir", "Choir"),
    ("Male choir", "Male Choir"),
    ("Female choir", "Female Choir"),
    ("Vocalization", "Vocalization"),
    // Strings
    ("Guitar", "Guitar Riff"),
    ("Electric guitar", "Electric Guitar"),
    ("Acoustic guitar", "Acoustic Guitar"),
    ("Violin", "Violin"),
    ("Cello", "Cello"),
    // Brass & woodwind
    ("Trumpet", "Trumpet Stab"),
    ("Saxophone", "Sax Riff"),
    ("Flute", "Flute Melody"),
    ("Clarinet", "Clarinet Line"),
];

/// Short name for the first table key contained in `class_name`.
pub fn short_name_for(class_name: &str) -> Option<&'static str> {
    SHORT_NAMES
        .iter()
        .find(|&&(key, _)| class_name.contains(key))
        .map(|&(_, short)| short)
}
