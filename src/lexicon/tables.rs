// Default lexicon tables.
//
// Entries are written lower-case. Names carrying Turkish letters are written
// with them; the ASCII spelling is derived when the lexicon is built.
// Suffix tables are matched against the ASCII form of the surname.

/// Common Turkey-Turkish surnames.
pub(crate) const SURNAME_WHITELIST: &[&str] = &[
    "yılmaz",
    "kaya",
    "demir",
    "şahin",
    "çelik",
    "yıldız",
    "yıldırım",
    "öztürk",
    "aydın",
    "özdemir",
    "arslan",
    "doğan",
    "kılıç",
    "aslan",
    "çetin",
    "kara",
    "koç",
    "kurt",
    "özkan",
    "şimşek",
    "polat",
    "korkmaz",
    "özcan",
    "çakır",
    "erdoğan",
    "yavuz",
    "can",
    "acar",
    "şen",
    "ersen",
    "aktaş",
    "güler",
    "yalçın",
    "güneş",
    "bozkurt",
    "bulut",
    "keskin",
    "ünal",
    "turan",
    "gül",
    "özer",
    "ışık",
    "kaplan",
    "avcı",
    "sarı",
    "tekin",
    "taş",
    "köse",
    "yüksel",
    "ateş",
    "aksoy",
    "çiftçi",
    "karaca",
    "coşkun",
    "kılınç",
    "tunç",
    "altun",
    "erdem",
    "duman",
    "bayram",
    "aydemir",
    "karakaya",
    "uysal",
    "akın",
    "türk",
    "başaran",
    "sönmez",
    "kahraman",
    "güven",
    "durmaz",
    "tuna",
    "ekinci",
    "yazıcı",
    "aydoğan",
    "karataş",
    "kurtuluş",
    "bilgin",
    "akbulut",
    "aksu",
    "güngör",
    "sezer",
    "kartal",
    "soylu",
    "demirci",
    "karagöz",
    "kocabaş",
    "uçar",
    "toprak",
    "yücel",
    "özgür",
];

/// Turkish surname endings (ASCII). A match on its own is not enough to accept.
pub(crate) const SURNAME_SUFFIXES: &[&str] = &[
    "oglu", "ogullari", "gil", "kaya", "tas", "tepe", "dag", "soy", "turk", "yurt", "demir", "celik", "gul", "yildiz",
    "bey", "koc",
];

/// First names that are distinctly Turkish in this spelling.
pub(crate) const STRONG_FIRST_NAMES: &[&str] = &[
    "mehmet",
    "ahmet",
    "mustafa",
    "hüseyin",
    "murat",
    "ömer",
    "ramazan",
    "recep",
    "halil",
    "süleyman",
    "hakan",
    "burak",
    "emre",
    "gökhan",
    "serkan",
    "volkan",
    "erkan",
    "tolga",
    "oğuz",
    "uğur",
    "yiğit",
    "barış",
    "çağlar",
    "doğan",
    "kadir",
    "kemal",
    "orhan",
    "ozan",
    "selçuk",
    "tuncay",
    "cem",
    "cengiz",
    "levent",
    "mert",
    "onur",
    "oktay",
    "sinan",
    "tayfun",
    "umut",
    "furkan",
    "enes",
    "berk",
    "kaan",
    "alper",
    "arda",
    "batuhan",
    "eren",
    "fatih",
    "muhammet",
    "mahmut",
    "abdullah",
    "metin",
    "ersin",
    "ayşe",
    "fatma",
    "emine",
    "hatice",
    "zeynep",
    "elif",
    "özlem",
    "gülsüm",
    "hülya",
    "şule",
    "derya",
    "ebru",
    "esra",
    "gizem",
    "merve",
    "büşra",
    "tuğba",
    "sibel",
    "songül",
    "yasemin",
    "dilek",
    "pınar",
    "serap",
    "sevgi",
    "gülay",
    "nurcan",
    "ayten",
    "hacer",
    "şeyma",
    "kübra",
    "melike",
    "aslı",
    "burcu",
    "ceren",
    "duygu",
    "ece",
    "gamze",
    "irem",
    "özge",
    "sevda",
    "tülay",
    "yeliz",
    "zehra",
    "meryem",
    "eda",
];

/// First names shared by several cultures; they need a Turkish surname.
pub(crate) const AMBIGUOUS_FIRST_NAMES: &[&str] = &[
    "ali", "hasan", "yusuf", "ibrahim", "ismail", "musa", "isa", "adam", "can", "deniz", "selim", "sami", "emir",
    "kenan", "yasin", "idris", "ilyas", "leyla", "lara", "maya", "dana", "mira",
];

/// Surname endings of Slavic, Nordic, Iberian, Armenian and similar origins.
/// The `bool` marks guarded suffixes, which also end genuine Turkish surnames.
pub(crate) const NON_TURKISH_MORPHOLOGY: &[(&str, bool)] = &[
    ("ov", false),
    ("ova", false),
    ("ev", false),
    ("eva", false),
    ("sky", false),
    ("ski", false),
    ("ska", false),
    ("wicz", false),
    ("vich", false),
    ("vic", false),
    ("enko", false),
    ("dottir", false),
    ("escu", false),
    ("opoulos", false),
    ("akis", false),
    ("ian", false),
    ("berg", false),
    ("stein", false),
    ("mann", false),
    ("son", true),
    ("sen", true),
    ("ez", true),
    ("yan", true),
];

/// Arabic, Persian and South-Asian particles and surnames, matched per token.
pub(crate) const REGION_MARKERS: &[&str] = &[
    "bin",
    "bint",
    "binti",
    "ibn",
    "abd",
    "abdul",
    "abu",
    "umm",
    "sheikh",
    "shaikh",
    "khan",
    "singh",
    "kaur",
    "patel",
    "sharma",
    "gupta",
    "kumar",
    "reddy",
    "rao",
    "iyer",
    "nair",
    "chaudhry",
    "chowdhury",
    "siddiqui",
    "qureshi",
    "hussain",
    "hossain",
    "rahman",
    "ahmadi",
    "hosseini",
    "mohammadi",
    "rezaei",
    "karimi",
];

/// Prefix particles, matched at the start of a hyphenated word.
pub(crate) const REGION_PREFIXES: &[&str] = &["al-", "el-", "ul-"];

/// Non-Turkish spelling → the Turkish spelling of the same name.
pub(crate) const SPELLING_VARIANTS: &[(&str, &str)] = &[
    ("mohammed", "mehmet"),
    ("mohammad", "mehmet"),
    ("mohamed", "mehmet"),
    ("mohamad", "mehmet"),
    ("muhammad", "muhammet"),
    ("ahmad", "ahmet"),
    ("ahmed", "ahmet"),
    ("mahmoud", "mahmut"),
    ("mahmood", "mahmut"),
    ("mahmud", "mahmut"),
    ("hussein", "hüseyin"),
    ("husein", "hüseyin"),
    ("hassan", "hasan"),
    ("omar", "ömer"),
    ("umar", "ömer"),
    ("othman", "osman"),
    ("uthman", "osman"),
    ("youssef", "yusuf"),
    ("yousef", "yusuf"),
    ("yousuf", "yusuf"),
    ("ebrahim", "ibrahim"),
    ("abdallah", "abdullah"),
    ("abdulla", "abdullah"),
    ("khalid", "halit"),
    ("khaled", "halit"),
    ("khalil", "halil"),
    ("hamid", "hamit"),
    ("hamed", "hamit"),
    ("rashid", "reşit"),
    ("rasheed", "reşit"),
    ("karim", "kerim"),
    ("kareem", "kerim"),
    ("tariq", "tarık"),
    ("tarek", "tarık"),
    ("murad", "murat"),
    ("jamal", "cemal"),
    ("jamil", "cemil"),
    ("jalal", "celal"),
    ("nasser", "nasır"),
    ("saeed", "sait"),
    ("said", "sait"),
    ("walid", "velit"),
    ("fatima", "fatma"),
    ("fatemeh", "fatma"),
    ("aisha", "ayşe"),
    ("aysha", "ayşe"),
    ("ayesha", "ayşe"),
    ("zainab", "zeynep"),
    ("zaynab", "zeynep"),
    ("khadija", "hatice"),
    ("khadijah", "hatice"),
    ("maryam", "meryem"),
    ("mariam", "meryem"),
    ("amina", "emine"),
    ("aminah", "emine"),
    ("salma", "selma"),
    ("layla", "leyla"),
];

/// Tokens that mark a company rather than a person (ASCII).
pub(crate) const CORPORATE_MARKERS: &[&str] = &[
    "llc",
    "inc",
    "ltd",
    "limited",
    "company",
    "co",
    "corp",
    "corporation",
    "trading",
    "gmbh",
    "plc",
    "holding",
    "holdings",
    "group",
    "enterprises",
    "industries",
    "solutions",
    "services",
    "consulting",
    "international",
    "bank",
    "a.s",
    "sti",
    "ltd.sti",
    "insaat",
    "ticaret",
    "sanayi",
];

pub(crate) const WESTERN_FIRST_NAMES: &[&str] = &[
    "john",
    "james",
    "michael",
    "david",
    "robert",
    "william",
    "richard",
    "thomas",
    "charles",
    "joseph",
    "christopher",
    "daniel",
    "matthew",
    "mark",
    "paul",
    "steven",
    "andrew",
    "kevin",
    "brian",
    "george",
    "edward",
    "peter",
    "jack",
    "harry",
    "oliver",
    "mary",
    "patricia",
    "jennifer",
    "linda",
    "elizabeth",
    "barbara",
    "susan",
    "jessica",
    "sarah",
    "sara",
    "karen",
    "nancy",
    "lisa",
    "emily",
    "emma",
    "olivia",
    "sophie",
    "anna",
    "laura",
    "rebecca",
    "rachel",
    "hannah",
    "charlotte",
    "hans",
    "klaus",
    "jürgen",
    "wolfgang",
    "pierre",
    "jean",
    "françois",
    "giuseppe",
    "marco",
    "luca",
    "carlos",
    "juan",
    "josé",
    "pedro",
    "miguel",
];

pub(crate) const WESTERN_SURNAMES: &[&str] = &[
    "smith",
    "johnson",
    "williams",
    "brown",
    "jones",
    "miller",
    "davis",
    "wilson",
    "moore",
    "taylor",
    "anderson",
    "thomas",
    "jackson",
    "white",
    "harris",
    "martin",
    "thompson",
    "clark",
    "lewis",
    "robinson",
    "walker",
    "young",
    "allen",
    "king",
    "wright",
    "scott",
    "green",
    "baker",
    "adams",
    "nelson",
    "hill",
    "campbell",
    "mitchell",
    "roberts",
    "carter",
    "phillips",
    "evans",
    "turner",
    "parker",
    "collins",
    "edwards",
    "stewart",
    "morris",
    "murphy",
    "cook",
    "rogers",
    "morgan",
    "cooper",
    "bailey",
    "reed",
    "kelly",
    "howard",
    "ward",
    "watson",
    "brooks",
    "wood",
    "bennett",
    "gray",
    "hughes",
    "price",
    "foster",
    "russell",
    "fisher",
    "schmidt",
    "schneider",
    "fischer",
    "weber",
    "meyer",
    "wagner",
    "becker",
    "schulz",
    "hoffmann",
    "müller",
    "mueller",
    "dubois",
    "bernard",
    "moreau",
    "rossi",
    "russo",
    "ferrari",
    "bianchi",
    "garcia",
    "silva",
    "santos",
];
