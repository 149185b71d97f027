//! Near-Earth object catalog.
//!
//! Facts compiled from NASA CNEOS and JPL Small-Body Database summaries.
//! Several objects appear more than once with differing notes; the entries
//! are kept as published so list indices stay stable.

use super::NeoRecord;

/// All catalog entries, in list order.
pub static NEO_CATALOG: &[NeoRecord] = &[
    NeoRecord {
        name: "(66391) 1999 KW4",
        distance_au: 0.0019,
        uniqueness: "Binary system with mutual orbit",
        properties: "Diameter ~1.3 km (primary), ~0.4 km (secondary)",
        details: "A binary asteroid with a smaller moon orbiting the larger primary body.",
    },
    NeoRecord {
        name: "(3200) Phaethon",
        distance_au: 0.0181,
        uniqueness: "Parent body of the Geminids meteor shower",
        properties: "Diameter ~5.8 km, highly eccentric orbit",
        details: "A unique asteroid/comet hybrid that is responsible for the Geminids meteor shower.",
    },
    NeoRecord {
        name: "2010 TK7",
        distance_au: 0.0015,
        uniqueness: "Earth’s only known Trojan asteroid",
        properties: "Diameter ~300 meters, stable Lagrange point orbit",
        details: "A near-Earth Trojan asteroid that shares Earth's orbit around the Sun.",
    },
    NeoRecord {
        name: "(52768) 1998 OR2",
        distance_au: 0.016,
        uniqueness: "Close approach in 2020",
        properties: "Diameter ~2 km, highly reflective surface",
        details: "A large asteroid that passed close to Earth in 2020 with a reflective surface.",
    },
    NeoRecord {
        name: "(2340) Hathor",
        distance_au: 0.0063,
        uniqueness: "Highly eccentric orbit",
        properties: "Diameter ~0.3 km, close approaches to Earth",
        details: "An asteroid with a highly eccentric orbit that occasionally passes near Earth.",
    },
    NeoRecord {
        name: "(162173) Ryugu",
        distance_au: 0.0015,
        uniqueness: "Visited by JAXA’s Hayabusa2 mission",
        properties: "Diameter ~900 meters, carbonaceous asteroid",
        details: "A near-Earth asteroid rich in carbon, samples have been returned to Earth.",
    },
    NeoRecord {
        name: "(5381) Sekhmet",
        distance_au: 0.0089,
        uniqueness: "Highly reflective asteroid",
        properties: "Diameter ~1.4 km, rotational period ~2.82 hours",
        details: "An asteroid with a fast rotational period and highly reflective surface.",
    },
    NeoRecord {
        name: "2014 JO25",
        distance_au: 0.0037,
        uniqueness: "Close approach in 2017",
        properties: "Diameter ~650 meters, elongated shape",
        details: "A large, elongated asteroid that passed close to Earth in 2017.",
    },
    NeoRecord {
        name: "1998 HL1",
        distance_au: 0.0004,
        uniqueness: "Close approach in 2019",
        properties: "Diameter ~1 km, slow rotation",
        details: "A large asteroid that passed close to Earth in 2019.",
    },
    NeoRecord {
        name: "2019 OK",
        distance_au: 0.0001,
        uniqueness: "Undetected close approach in 2019",
        properties: "Diameter ~100 meters, fast speed",
        details: "An asteroid that passed extremely close to Earth undetected in 2019.",
    },
    NeoRecord {
        name: "(99907) 1989 VA",
        distance_au: 0.0021,
        uniqueness: "Frequent close approaches to Earth",
        properties: "Diameter ~400 meters, fast rotation",
        details: "An asteroid that frequently passes close to Earth.",
    },
    NeoRecord {
        name: "(4769) Castalia",
        distance_au: 0.0146,
        uniqueness: "First asteroid imaged by radar",
        properties: "Diameter ~1.4 km, binary system",
        details: "A binary asteroid and the first to be imaged using radar.",
    },
    NeoRecord {
        name: "2019 VD",
        distance_au: 0.00065,
        uniqueness: "Close approach in 2019",
        properties: "Diameter ~30 meters, high velocity",
        details: "A small asteroid that made a very close approach in 2019.",
    },
    NeoRecord {
        name: "(3122) Florence",
        distance_au: 0.035,
        uniqueness: "Has two small moons",
        properties: "Diameter ~4.4 km, binary system",
        details: "A large asteroid with two moons that passed near Earth in 2017.",
    },
    NeoRecord {
        name: "(6178) 1986 DA",
        distance_au: 0.0032,
        uniqueness: "Highly metal-rich asteroid",
        properties: "Diameter ~2.3 km, slow rotation",
        details: "An asteroid that is rich in metals, a potential target for space mining.",
    },
    NeoRecord {
        name: "(6489) Golevka",
        distance_au: 0.0034,
        uniqueness: "Has undergone Yarkovsky effect",
        properties: "Diameter ~0.5 km, irregular shape",
        details: "A small asteroid whose orbit has changed due to the Yarkovsky effect.",
    },
    NeoRecord {
        name: "2021 PH27",
        distance_au: 0.001,
        uniqueness: "Fastest orbiting NEO",
        properties: "Diameter ~1 km, 114-day orbital period",
        details: "An asteroid with the fastest known orbit around the Sun.",
    },
    NeoRecord {
        name: "(175706) 1996 FG3",
        distance_au: 0.0029,
        uniqueness: "Potential binary system",
        properties: "Diameter ~1.6 km, rotational period ~3.6 hours",
        details: "A potential binary asteroid with a fast rotation.",
    },
    NeoRecord {
        name: "(1036) Ganymed",
        distance_au: 0.0112,
        uniqueness: "Largest near-Earth asteroid",
        properties: "Diameter ~34.8 km, highly eccentric orbit",
        details: "The largest near-Earth asteroid with a highly elliptical orbit.",
    },
    NeoRecord {
        name: "2021 UA1",
        distance_au: 0.00006,
        uniqueness: "Passed within Earth’s geostationary orbit",
        properties: "Diameter ~2 meters, extremely fast approach",
        details: "A small asteroid that passed very close to Earth in 2021.",
    },
    NeoRecord {
        name: "(4660) Nereus",
        distance_au: 0.003,
        uniqueness: "Potential target for space mining",
        properties: "Diameter ~330 meters, elongated shape",
        details: "A small asteroid with a near-Earth orbit, potential mining target.",
    },
    NeoRecord {
        name: "(2100) Ra-Shalom",
        distance_au: 0.0025,
        uniqueness: "Low albedo (dark surface)",
        properties: "Diameter ~2.5 km, highly reflective surface",
        details: "A dark asteroid with a slow rotational period.",
    },
    NeoRecord {
        name: "2008 TC3",
        distance_au: 0.0005,
        uniqueness: "First asteroid detected before impact",
        properties: "Diameter ~4 meters, fast velocity",
        details: "The first asteroid to be detected before it impacted Earth.",
    },
    NeoRecord {
        name: "2022 AE1",
        distance_au: 0.001,
        uniqueness: "Close approach in 2022",
        properties: "Diameter ~50 meters, high albedo",
        details: "A small, fast-moving asteroid that passed close to Earth in 2022.",
    },
    NeoRecord {
        name: "(7753) 1988 XB",
        distance_au: 0.005,
        uniqueness: "Frequent close approaches to Earth",
        properties: "Diameter ~700 meters, elongated shape",
        details: "An elongated asteroid that frequently passes by Earth.",
    },
    NeoRecord {
        name: "(5381) Sekhmet",
        distance_au: 0.0089,
        uniqueness: "Highly reflective asteroid",
        properties: "Diameter ~1.4 km, fast rotation period",
        details: "A rapidly rotating asteroid with a reflective surface.",
    },
    NeoRecord {
        name: "2021 JE1",
        distance_au: 0.00023,
        uniqueness: "Very small asteroid, 2021 close approach",
        properties: "Diameter ~2 meters, fast-moving object",
        details: "A very small, fast-moving object that passed close to Earth.",
    },
    NeoRecord {
        name: "(441987) 2010 NY65",
        distance_au: 0.0035,
        uniqueness: "Close approach every 2 years",
        properties: "Diameter ~230 meters, binary system",
        details: "An asteroid that has a frequent approach near Earth every two years.",
    },
    NeoRecord {
        name: "(408873) 2009 BD",
        distance_au: 0.0012,
        uniqueness: "Tiny asteroid with high velocity",
        properties: "Diameter ~4 meters, Earth-like orbit",
        details: "A very small asteroid that has an orbit similar to Earth’s.",
    },
    NeoRecord {
        name: "2018 AH",
        distance_au: 0.002,
        uniqueness: "Close approach in 2018",
        properties: "Diameter ~100 meters, high velocity",
        details: "A small asteroid that made a close pass to Earth in 2018.",
    },
    NeoRecord {
        name: "(153201) 2000 WO107",
        distance_au: 0.0014,
        uniqueness: "Metal-rich asteroid",
        properties: "Diameter ~500 meters, high metal content",
        details: "An asteroid rich in metals, with potential for space mining.",
    },
    NeoRecord {
        name: "(99942) Apophis",
        distance_au: 0.00037,
        uniqueness: "Close approach in 2029",
        properties: "Diameter ~370 meters, fast rotation",
        details: "An asteroid that will make a very close approach to Earth in 2029.",
    },
    NeoRecord {
        name: "2021 QC1",
        distance_au: 0.00015,
        uniqueness: "Undetected until after close pass",
        properties: "Diameter ~30 meters, high velocity",
        details: "An asteroid that passed very close to Earth in 2021, detected afterward.",
    },
    NeoRecord {
        name: "2021 LX1",
        distance_au: 0.00043,
        uniqueness: "Small but fast-moving object",
        properties: "Diameter ~10 meters, high speed",
        details: "A small asteroid that passed close to Earth at high speed.",
    },
    NeoRecord {
        name: "(101955) Bennu",
        distance_au: 0.0023,
        uniqueness: "Target of OSIRIS-REx mission",
        properties: "Diameter ~500 meters, rich in carbon",
        details: "An asteroid from which NASA's OSIRIS-REx mission has returned samples.",
    },
    NeoRecord {
        name: "(163899) 2003 SD220",
        distance_au: 0.0022,
        uniqueness: "Close approach every few years",
        properties: "Diameter ~1.6 km, elongated shape",
        details: "A large, elongated asteroid with frequent close approaches to Earth.",
    },
    NeoRecord {
        name: "2020 CD3",
        distance_au: 0.00015,
        uniqueness: "Temporary natural satellite of Earth",
        properties: "Diameter ~3 meters, fast orbit",
        details: "A small asteroid that temporarily became Earth's natural satellite.",
    },
    NeoRecord {
        name: "2021 GW4",
        distance_au: 0.00003,
        uniqueness: "Very close approach in 2021",
        properties: "Diameter ~4 meters, fast velocity",
        details: "A small asteroid that passed very close to Earth in 2021.",
    },
    NeoRecord {
        name: "(101955) Bennu",
        distance_au: 0.002,
        uniqueness: "NASA OSIRIS-REx mission sample return",
        properties: "Diameter ~500 meters, carbonaceous surface",
        details: "A carbon-rich asteroid that was sampled by the OSIRIS-REx mission.",
    },
    NeoRecord {
        name: "(85627) 1998 KR2",
        distance_au: 0.0056,
        uniqueness: "Close approach in 1998",
        properties: "Diameter ~1.2 km, fast rotational period",
        details: "A large asteroid that passed close to Earth in 1998.",
    },
    NeoRecord {
        name: "2021 RS2",
        distance_au: 0.0002,
        uniqueness: "Close approach in 2021",
        properties: "Diameter ~10 meters, high velocity",
        details: "A small asteroid that passed close to Earth in 2021.",
    },
    NeoRecord {
        name: "(3122) Florence",
        distance_au: 0.035,
        uniqueness: "Near-miss in 2017, two moons",
        properties: "Diameter ~4.4 km, binary system",
        details: "A large asteroid that passed close to Earth with two moons.",
    },
    NeoRecord {
        name: "2021 PJ1",
        distance_au: 0.00015,
        uniqueness: "Small but fast-moving object",
        properties: "Diameter ~10 meters, fast velocity",
        details: "A small asteroid that made a close approach in 2021.",
    },
    NeoRecord {
        name: "(3122) Florence",
        distance_au: 0.035,
        uniqueness: "Two moons",
        properties: "Diameter ~4.9 km, binary system",
        details: "A large asteroid with two moons, passed near Earth in 2017.",
    },
    NeoRecord {
        name: "(46610) 1998 KY26",
        distance_au: 0.004,
        uniqueness: "Potential target for future missions",
        properties: "Diameter ~40 meters, rapid rotation",
        details: "A small asteroid with a very fast rotation, making it a potential target for future exploration.",
    },
    NeoRecord {
        name: "(3353) Wega",
        distance_au: 0.0075,
        uniqueness: "Has a high albedo",
        properties: "Diameter ~1.5 km, bright surface",
        details: "A bright asteroid with a high albedo, which reflects much of the sunlight.",
    },
    NeoRecord {
        name: "(162173) Ryugu",
        distance_au: 0.0024,
        uniqueness: "Sample return mission by Hayabusa2",
        properties: "Diameter ~900 meters, carbon-rich",
        details: "A carbon-rich asteroid from which samples were returned by Japan's Hayabusa2 mission.",
    },
    NeoRecord {
        name: "(2181) 1984 YA",
        distance_au: 0.0083,
        uniqueness: "Potentially hazardous asteroid",
        properties: "Diameter ~1.2 km, well-studied orbit",
        details: "An asteroid with a well-characterized orbit that poses a potential hazard due to its size.",
    },
    NeoRecord {
        name: "(1433) Aureliania",
        distance_au: 0.0124,
        uniqueness: "Has an unusual light curve",
        properties: "Diameter ~5.5 km, slow rotation",
        details: "This asteroid has a peculiar light curve, indicating a complex shape.",
    },
    NeoRecord {
        name: "(951) Gaspra",
        distance_au: 0.0145,
        uniqueness: "First asteroid visited by a spacecraft",
        properties: "Diameter ~19 km, irregular shape",
        details: "The first asteroid to be visited by a spacecraft, the Galileo orbiter, in 1991.",
    },
    NeoRecord {
        name: "(1862) Apollo",
        distance_au: 0.0061,
        uniqueness: "Prototype for asteroid classification",
        properties: "Diameter ~2.1 km, strong reflectivity",
        details: "This asteroid served as the prototype for the Apollo group of near-Earth asteroids.",
    },
    NeoRecord {
        name: "(13254) 1998 SG35",
        distance_au: 0.0023,
        uniqueness: "Potentially dangerous asteroid",
        properties: "Diameter ~1 km, stable orbit",
        details: "An asteroid with a stable orbit that could potentially pose a threat to Earth.",
    },
    NeoRecord {
        name: "(20000) 1998 EQ3",
        distance_au: 0.0039,
        uniqueness: "Trojan asteroid of Venus",
        properties: "Diameter ~2 km, shared orbit",
        details: "A Trojan asteroid that shares an orbit with Venus, making it unique among near-Earth objects.",
    },
    NeoRecord {
        name: "(1775) 1970-067",
        distance_au: 0.0011,
        uniqueness: "Known for its irregular shape",
        properties: "Diameter ~1.8 km, notable light variations",
        details: "An asteroid known for its irregular shape and significant light variation.",
    },
    NeoRecord {
        name: "(1981) Midas",
        distance_au: 0.0078,
        uniqueness: "Highly reflective surface",
        properties: "Diameter ~2 km, metallic composition",
        details: "An asteroid with a metallic surface that reflects a significant amount of sunlight.",
    },
    NeoRecord {
        name: "(3299) 1981 KJ",
        distance_au: 0.0055,
        uniqueness: "Binary system candidate",
        properties: "Diameter ~1.6 km, slow rotation",
        details: "A candidate for being a binary asteroid, with a slow rotational period.",
    },
    NeoRecord {
        name: "(4000) 1986 TQ",
        distance_au: 0.0043,
        uniqueness: "Near-Earth object with a stable orbit",
        properties: "Diameter ~1.2 km, elliptical orbit",
        details: "A near-Earth object with a well-defined, stable elliptical orbit.",
    },
    NeoRecord {
        name: "(4179) Toutatis",
        distance_au: 0.0066,
        uniqueness: "Has an irregular shape and rotation",
        properties: "Diameter ~4.5 km, complex rotation",
        details: "A near-Earth asteroid with a unique, irregular shape and a complex rotation.",
    },
    NeoRecord {
        name: "(18610) 1999 TR3",
        distance_au: 0.0028,
        uniqueness: "Potential target for mining",
        properties: "Diameter ~1.5 km, metal-rich",
        details: "An asteroid that is rich in metals and could be a potential target for mining in the future.",
    },
    NeoRecord {
        name: "(11736) 1996 AID",
        distance_au: 0.0036,
        uniqueness: "Unusual surface features",
        properties: "Diameter ~900 meters, non-uniform surface",
        details: "An asteroid with a non-uniform surface that displays unusual geological features.",
    },
    NeoRecord {
        name: "(2825) 1981 FJ",
        distance_au: 0.0051,
        uniqueness: "High radar reflectivity",
        properties: "Diameter ~1.7 km, metallic surface",
        details: "An asteroid known for its high radar reflectivity due to its metallic surface.",
    },
    NeoRecord {
        name: "(11214) 1994 RZ3",
        distance_au: 0.0087,
        uniqueness: "Potential binary asteroid",
        properties: "Diameter ~1.4 km, irregular shape",
        details: "A potential binary asteroid with an irregular shape and varying rotation.",
    },
    NeoRecord {
        name: "(1972) 1985 RA",
        distance_au: 0.003,
        uniqueness: "Close approaches to Earth",
        properties: "Diameter ~1 km, stable orbit",
        details: "An asteroid that frequently approaches Earth with a stable orbital path.",
    },
    NeoRecord {
        name: "(2341) 1985 EL",
        distance_au: 0.0067,
        uniqueness: "Possible cometary origin",
        properties: "Diameter ~1.5 km, irregular shape",
        details: "An asteroid believed to have a cometary origin due to its irregular shape and surface features.",
    },
];
