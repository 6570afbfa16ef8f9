//! Fabricated job records for demonstrating the sheet format.
//!
//! Only ever produced on explicit request; scrape runs never fall back to
//! these.

use common::JobRecord;
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_COUNT: usize = 25;
const FIRST_JOB_ID: usize = 1000;

const TITLES: &[&str] = &[
    "Senior Software Engineer", "Data Scientist", "Product Manager",
    "DevOps Engineer", "Frontend Developer", "Backend Developer",
    "Machine Learning Engineer", "Cloud Architect", "UI/UX Designer",
    "Technical Program Manager", "Site Reliability Engineer",
    "Security Engineer", "Mobile Developer", "Full Stack Developer",
    "Data Engineer", "Business Analyst", "QA Engineer",
    "Principal Software Engineer", "Research Scientist",
    "Engineering Manager",
];

const LOCATIONS: &[&str] = &[
    "Seattle, WA", "San Francisco, CA", "New York, NY", "Austin, TX",
    "Boston, MA", "Remote", "Chicago, IL", "Los Angeles, CA",
    "Denver, CO", "Atlanta, GA", "Remote - US", "Portland, OR",
    "San Jose, CA", "Washington, DC", "Remote - Global",
];

const EXPERIENCE_LEVELS: &[&str] = &[
    "3+ years", "5+ years", "7+ years", "2-4 years", "Entry level",
    "Senior level", "10+ years", "4-6 years", "Principal level",
    "Lead level", "1-3 years", "8+ years",
];

const SKILL_SETS: &[&str] = &[
    "Python, Django, PostgreSQL, AWS, Docker",
    "JavaScript, React, Node.js, MongoDB, Git",
    "Java, Spring Boot, Microservices, Kubernetes, Jenkins",
    "C#, .NET, Azure, SQL Server, DevOps",
    "Go, Docker, Kubernetes, Terraform, AWS",
    "Python, TensorFlow, PyTorch, SQL, Machine Learning",
    "React, TypeScript, GraphQL, Jest, CSS",
    "AWS, CloudFormation, Lambda, S3, EC2",
    "Figma, Sketch, Adobe Creative Suite, Prototyping",
    "Agile, Scrum, JIRA, Confluence, Leadership",
    "Linux, Bash, Monitoring, Alerting, SRE",
    "Cybersecurity, Penetration Testing, SIEM, Compliance",
    "Swift, iOS, Objective-C, Xcode, App Store",
    "Angular, Vue.js, HTML5, CSS3, Webpack",
    "Spark, Hadoop, Airflow, ETL, Data Warehousing",
    "SQL, Tableau, Power BI, Statistics, Excel",
    "Selenium, JUnit, TestNG, Automation, Performance Testing",
    "Architecture, System Design, Scalability, Performance",
    "Research, Publications, PhD, Algorithm Design",
    "Team Leadership, Project Management, Strategy",
];

const DESCRIPTIONS: &[&str] = &[
    "Join our team to build scalable software solutions that impact millions of users worldwide. You'll work with cutting-edge technologies and collaborate with talented engineers.",
    "We're looking for a passionate data scientist to extract insights from large datasets and build predictive models that drive business decisions.",
    "Lead product strategy and roadmap for our flagship products. Work closely with engineering, design, and business teams to deliver exceptional user experiences.",
    "Design and maintain our cloud infrastructure. Implement CI/CD pipelines and ensure high availability of our services.",
    "Create beautiful and intuitive user interfaces using modern web technologies. Collaborate with designers and backend engineers.",
    "Build robust backend services and APIs. Work with databases, distributed systems, and ensure high performance and reliability.",
    "Develop machine learning models and deploy them at scale. Work on computer vision, NLP, and recommendation systems.",
    "Design cloud architecture for enterprise-scale applications. Focus on security, scalability, and cost optimization.",
    "Design user-centered experiences for web and mobile applications. Conduct user research and create prototypes.",
    "Drive technical programs across multiple engineering teams. Ensure successful delivery of complex projects.",
];

const BASE_URLS: &[&str] = &[
    "https://careers.microsoft.com/job/",
    "https://jobs.google.com/job/",
    "https://careers.amazon.com/job/",
    "https://careers.apple.com/job/",
    "https://careers.netflix.com/job/",
];

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[&str]) -> String {
    choices.choose(rng).copied().unwrap_or_default().to_string()
}

/// `count` records, each field drawn independently.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<JobRecord> {
    (0..count)
        .map(|i| JobRecord {
            title: pick(rng, TITLES),
            location: pick(rng, LOCATIONS),
            experience: pick(rng, EXPERIENCE_LEVELS),
            skills: pick(rng, SKILL_SETS),
            salary: String::new(),
            url: format!("{}{}", pick(rng, BASE_URLS), FIRST_JOB_ID + i),
            summary: pick(rng, DESCRIPTIONS),
        })
        .collect()
}
