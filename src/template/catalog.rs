//! The catalog shipped with the crate

/// Built-in institutions, document types, form option lists and sample records
pub const BUILTIN_CATALOG: &str = r##"
[[institution]]
code = "harvard"
name = "Harvard University"
address = "Cambridge, MA 02138"
phone = "(617) 495-1000"
website = "harvard.edu"
color = "#8B0000"

[[institution]]
code = "stanford"
name = "Stanford University"
address = "Stanford, CA 94305"
phone = "(650) 723-2300"
website = "stanford.edu"
color = "#CC0000"

[[institution]]
code = "mit"
name = "Massachusetts Institute of Technology"
address = "Cambridge, MA 02139"
phone = "(617) 253-1000"
website = "mit.edu"
color = "#8A2BE2"

[[institution]]
code = "generic"
name = "University"
address = "University Address"
phone = "University Phone"
website = "university.edu"
color = "#2F4F4F"

[[document_type]]
code = "bonafide"
title = "BONAFIDE CERTIFICATE"
body = "This is to certify that {STUDENT_NAME}, Roll No: {ROLL_NUMBER}, is a bonafide student of this institution. He/She has been studying in this institution since {ADMISSION_DATE} in the {COURSE} program in the Department of {DEPARTMENT}. This certificate is issued for the purpose of {PURPOSE}."

[[document_type]]
code = "noc"
title = "NO OBJECTION CERTIFICATE"
body = "This is to certify that we have no objection to {STUDENT_NAME}, Roll No: {ROLL_NUMBER}, a student of {COURSE} program in the Department of {DEPARTMENT}, for {PURPOSE}. The student is in good academic standing and has no disciplinary issues."

[[document_type]]
code = "character"
title = "CHARACTER CERTIFICATE"
body = "This is to certify that {STUDENT_NAME}, Roll No: {ROLL_NUMBER}, is a student of {COURSE} program in the Department of {DEPARTMENT}. During his/her stay in this institution, his/her character and conduct have been found to be satisfactory. This certificate is issued for {PURPOSE}."

[[document_type]]
code = "transfer"
title = "TRANSFER CERTIFICATE"
body = "This is to certify that {STUDENT_NAME}, Roll No: {ROLL_NUMBER}, was a student of this institution from {ADMISSION_DATE} studying {COURSE} in the Department of {DEPARTMENT}. He/She is now seeking transfer for {PURPOSE}. His/Her character and conduct during the stay were satisfactory."

[[document_type]]
code = "fee_structure"
title = "FEE STRUCTURE LETTER"
body = "This letter provides the official fee structure for {STUDENT_NAME}, Roll No: {ROLL_NUMBER}, enrolled in {COURSE} program in the Department of {DEPARTMENT}. This information is provided for {PURPOSE}. Please contact the finance office for detailed fee breakdown."

[[document_type]]
code = "transcript"
title = "ACADEMIC TRANSCRIPT REQUEST"
body = "This acknowledges the request for official academic transcripts for {STUDENT_NAME}, Roll No: {ROLL_NUMBER}, enrolled in {COURSE} program in the Department of {DEPARTMENT}. The transcripts are requested for {PURPOSE}. Official transcripts will be processed within 5-7 business days."

[reference]
courses = [
    "Bachelor of Science (B.Sc.)",
    "Bachelor of Arts (B.A.)",
    "Bachelor of Engineering (B.E.)",
    "Bachelor of Technology (B.Tech)",
    "Bachelor of Business Administration (B.B.A.)",
    "Master of Science (M.Sc.)",
    "Master of Arts (M.A.)",
    "Master of Engineering (M.E.)",
    "Master of Technology (M.Tech)",
    "Master of Business Administration (M.B.A.)",
    "Doctor of Philosophy (Ph.D.)",
    "Bachelor of Medicine (M.B.B.S.)",
    "Bachelor of Laws (L.L.B.)",
    "Master of Laws (L.L.M.)",
]
departments = [
    "Computer Science",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Chemical Engineering",
    "Biotechnology",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Economics",
    "Business Administration",
    "Law",
    "Medicine",
    "Arts and Humanities",
    "Social Sciences",
]
year_options = ["1st Year", "2nd Year", "3rd Year", "4th Year", "5th Year", "6th Year"]

[[sample]]
student_name = "John Smith"
roll_number = "CS2024001"
course = "Bachelor of Science (B.Sc.)"
department = "Computer Science"
year_of_study = "2nd Year"
admission_date = "2023-08-15"
email = "john.smith@university.edu"
phone = "+1-555-0123"
purpose = "Internship application"

[[sample]]
student_name = "Sarah Johnson"
roll_number = "EE2024002"
course = "Bachelor of Engineering (B.E.)"
department = "Electrical Engineering"
year_of_study = "3rd Year"
admission_date = "2022-09-01"
email = "sarah.johnson@university.edu"
phone = "+1-555-0124"
purpose = "Study abroad program"

[[sample]]
student_name = "Michael Chen"
roll_number = "MBA2024003"
course = "Master of Business Administration (M.B.A.)"
department = "Business Administration"
year_of_study = "1st Year"
admission_date = "2024-01-15"
email = "michael.chen@university.edu"
phone = "+1-555-0125"
purpose = "Professional certification"
"##;
