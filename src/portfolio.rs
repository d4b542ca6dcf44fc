//! Static page content.

pub const OWNER_NAME: &str = "Abdullah Talha Akpur";
pub const HEADLINE: &str = "Frontend Developer";
pub const TAGLINE: &str = "Crafting Digital Experiences in the Digital Universe";
pub const CONTACT_EMAIL: &str = "akpurrabdullah@gmail.com";
pub const CV_PATH: &str = "/FrontendEnglish.pdf";

pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", anchor: "home" },
    NavItem { label: "About", anchor: "about" },
    NavItem { label: "Skills", anchor: "skills" },
    NavItem { label: "Projects", anchor: "projects" },
    NavItem { label: "Contact", anchor: "contact" },
];

pub struct AboutCard {
    pub title: &'static str,
    pub accent: &'static str,
    pub body: &'static str,
}

pub const ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        title: "Professional Journey",
        accent: "text-blue-400",
        body: "As a Frontend Developer with extensive experience in modern web technologies, I specialize in creating responsive, user-friendly applications that combine aesthetics with functionality. My expertise spans across React, Vue, and Angular, allowing me to choose the best tools for each project's unique requirements.",
    },
    AboutCard {
        title: "Technical Expertise",
        accent: "text-green-400",
        body: "My full-stack capabilities include both frontend and backend development, with proficiency in Node.js and Python. I have extensive experience with modern databases like MongoDB and Firebase, enabling me to build scalable and efficient applications.",
    },
];

/// Devicon class and text colour for the technology strip under About.
pub const TECH_ICONS: &[(&str, &str)] = &[
    ("devicon-react-original", "text-blue-400"),
    ("devicon-vuejs-plain", "text-green-400"),
    ("devicon-angularjs-plain", "text-red-400"),
    ("devicon-nodejs-plain", "text-green-500"),
    ("devicon-python-plain", "text-yellow-400"),
    ("devicon-mongodb-plain", "text-green-500"),
    ("devicon-firebase-plain", "text-yellow-500"),
    ("devicon-tailwindcss-original", "text-blue-400"),
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub accent: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend Development",
        accent: "text-blue-400",
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "Vue.js", level: 70 },
            Skill { name: "Angular", level: 75 },
            Skill { name: "JavaScript", level: 100 },
            Skill { name: "HTML/CSS", level: 100 },
            Skill { name: "Tailwind CSS", level: 90 },
            Skill { name: "Bootstrap", level: 85 },
        ],
    },
    SkillGroup {
        title: "Backend Development",
        accent: "text-green-400",
        skills: &[
            Skill { name: "Python", level: 85 },
            Skill { name: "Node.js", level: 80 },
            Skill { name: "SQL", level: 65 },
            Skill { name: "MongoDB", level: 80 },
            Skill { name: "Firebase", level: 80 },
            Skill { name: "RESTful APIs", level: 90 },
        ],
    },
];

pub const ADDITIONAL_SKILLS: &[&str] = &[
    "Git & Version Control",
    "Responsive Design",
    "UI/UX Principles",
    "Agile Development",
    "Performance Optimization",
    "Figma",
    "Canva",
];

pub struct ProjectImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub images: &'static [ProjectImage],
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Agriverts React Dashboard",
        description: "For Agriverts company, I developed the frontend of an artificial intelligence-based plant analysis platform. I created user-friendly and responsive interfaces using React.js, Node.js, HTML, CSS, and Material UI.",
        images: &[ProjectImage {
            src: "/projects/agriverts.png",
            alt: "Agriverts React Dashboard",
        }],
        tags: &["React", "Node.js", "Material UI", "CSS"],
    },
    Project {
        title: "Social Media Platform",
        description: "A full-stack social media application where users can share posts, like, and comment. Features include real-time updates, user authentication, and a responsive design built with React and Material UI.",
        images: &[ProjectImage {
            src: "/projects/socialmedia.png",
            alt: "Social Media Platform",
        }],
        tags: &["React", "Node.js", "Material UI", "CSS"],
    },
    Project {
        title: "Memory App",
        description: "An interactive memory game application built with React.js. Users can create, flip and match cards, track their scores, and compete against their previous records. Features a clean, modern UI with smooth animations.",
        images: &[ProjectImage {
            src: "/projects/memoryapp.png",
            alt: "Memory App",
        }],
        tags: &["React.js", "Node.js", "CSS"],
    },
    Project {
        title: "Spend Money App",
        description: "An interactive spending simulation app inspired by the \"Spend Money\" concept. Users can manage a virtual budget, make purchases from a catalog of items, and see real-time updates of their remaining balance with smooth animations and intuitive UI.",
        images: &[ProjectImage {
            src: "/projects/spendmoney.png",
            alt: "Spend Money App",
        }],
        tags: &["React.js", "Node.js", "CSS"],
    },
    Project {
        title: "Github Finder App",
        description: "A React-based application that allows users to search for GitHub users and view their profiles. Built with React and styled with Bootstrap for a responsive and modern user experience.",
        images: &[ProjectImage {
            src: "/projects/githubfinder.png",
            alt: "Github Finder",
        }],
        tags: &["React.js", "Node.js", "Bootstrap", "CSS"],
    },
    Project {
        title: "Gallery Image App",
        description: "A modern image gallery application with a sleek interface. Features include dynamic image loading, smooth transitions, and responsive masonry layout. Built with React and Vite for optimal performance, with TypeScript for enhanced code reliability.",
        images: &[
            ProjectImage {
                src: "/projects/image.png",
                alt: "Gallery",
            },
            ProjectImage {
                src: "/projects/image1.png",
                alt: "Gallery",
            },
        ],
        tags: &["React.js", "Redux", "TypeScript", "Vite", "CSS"],
    },
    Project {
        title: "Compare Products App",
        description: "A modern e-commerce application that allows users to compare products side-by-side. Features include dynamic product comparison, personalized recommendations, and secure payment processing.",
        images: &[
            ProjectImage {
                src: "/projects/kbk.png",
                alt: "Compare Products",
            },
            ProjectImage {
                src: "/projects/benzer.png",
                alt: "Compare Products",
            },
        ],
        tags: &["Python", "Django", "HTML", "MySQL", "CSS"],
    },
    Project {
        title: "Bookstore",
        description: "A modern e-commerce application that allows users to search and purchase books. Features include dynamic book recommendations.",
        images: &[ProjectImage {
            src: "/projects/kitap.png",
            alt: "Bookstore",
        }],
        tags: &["Python", "Django", "SQLite", "HTML", "CSS"],
    },
    Project {
        title: "Flight Ticket App",
        description: "A web application that allows users to search and book flight tickets. Features include real-time flight information.",
        images: &[ProjectImage {
            src: "/projects/ticketapp.png",
            alt: "Ticket app",
        }],
        tags: &["Vue.js", "Vite.js", "Node.js", "CSS"],
    },
];

pub struct ProfileLink {
    pub name: &'static str,
    pub caption: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

pub const PROFILE_LINKS: &[ProfileLink] = &[
    ProfileLink {
        name: "LinkedIn",
        caption: "Professional Network",
        href: "https://www.linkedin.com/in/abdullah-talha-akpur-088b99185/",
        icon: "devicon-linkedin-plain",
        accent: "group-hover:bg-blue-500/20 text-blue-400",
    },
    ProfileLink {
        name: "GitHub",
        caption: "Code Repository",
        href: "https://github.com/AbdullahTalhaAkpur",
        icon: "devicon-github-original",
        accent: "group-hover:bg-green-500/20 text-green-400",
    },
    ProfileLink {
        name: "Medium",
        caption: "Tech Articles & Blogs",
        href: "https://medium.com/@akpurrabdullah",
        icon: "devicon-medium-original",
        accent: "group-hover:bg-gray-500/20 text-gray-300",
    },
];
