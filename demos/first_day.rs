use chrono::{NaiveDate, NaiveTime, Utc};
use hr_core::{
    error::Result,
    access::Role,
    models::{
        Op,
        attendance::{Attendance, AttendanceID},
        company::{Company, CompanyID},
        department::{Department, DepartmentID},
        designation::{Designation, DesignationID},
        employee::{Employee, EmployeeID},
        leave::{Leave, LeaveID},
        leave_type::{LeaveType, LeaveTypeID},
        promotion::{Promotion, PromotionID},
        user::{User, UserID},
    },
    transactions::{
        attendance,
        identity,
        leave,
        promotion,
    },
};

/// Normally storage would already hold the directory; we're starting from a
/// blank slate, so seed one employee and the records around them.
fn seed_directory() -> Result<(User, Employee, LeaveType, DesignationID)> {
    let now = Utc::now();
    let company = Company::builder()
        .id(CompanyID::new("0b0aae2f-3e03-4478-8cd5-91b8a1602afc"))
        .name("Acme Logistics")
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build().unwrap();
    let department = Department::builder()
        .id(DepartmentID::new("4e57a26c-7d0a-4bfb-8a8e-7b2d5befc91e"))
        .company_id(company.id().clone())
        .name("Operations")
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build().unwrap();
    let dispatcher = Designation::builder()
        .id(DesignationID::new("9d2e9e57-30c5-4ccc-bf08-9df9e2a5a0ff"))
        .title("Dispatcher")
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build().unwrap();
    let senior = DesignationID::new("c9e7c4a4-f3a6-42d1-9fbe-2f00cf0a7ecf");
    let employee = Employee::builder()
        .id(EmployeeID::new("5c3f3f1a-13b5-41d1-90ba-67a0ad00c85b"))
        .emp_no("EMP-0042")
        .full_name("Nadia Rahman")
        .email("nadia.rahman@acme.example")
        .join_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        .company_id(company.id().clone())
        .department_id(department.id().clone())
        .designation_id(dispatcher.id().clone())
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build().unwrap();
    let annual = LeaveType::builder()
        .id(LeaveTypeID::new("52b4d2c4-5a2c-4ab2-bc8a-3a5efab5d5c8"))
        .name("Annual")
        .annual_quota(hr_core::num!(20))
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build().unwrap();
    let login = User::builder()
        .id(UserID::new("c36ae09e-4bba-4c60-9a4f-19e4d2a14ec9"))
        .roles(Vec::<Role>::new())
        .email("Nadia.Rahman@Acme.Example")
        .name("Nadia Rahman")
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build().unwrap();
    // first visit: link the login to its employee record (the email match is
    // case-insensitive) and pick up the Employee role
    let mods = identity::link_by_email(login, None, Some(employee), &now)?.into_vec();
    let employee = mods[0].clone().expect_op::<Employee>(Op::Update)?;
    let login = mods[1].clone().expect_op::<User>(Op::Update)?;
    Ok((login, employee, annual, senior))
}

fn main() -> Result<()> {
    let (login, employee, annual, senior) = seed_directory()?;
    let now = Utc::now();
    let today = now.date_naive();

    // the morning: check in, look at the day, check out in the evening
    let mods = attendance::check_in(&login, &employee, None, AttendanceID::new("att-1"), today, NaiveTime::from_hms_opt(9, 0, 0).unwrap(), &now)?.into_vec();
    let row = mods[0].clone().expect_op::<Attendance>(Op::Create)?;
    println!("{}", attendance::status(Some(&row)).message());

    let mods = attendance::check_out(&login, &employee, Some(row), NaiveTime::from_hms_opt(17, 30, 0).unwrap(), &now)?.into_vec();
    let row = mods[0].clone().expect_op::<Attendance>(Op::Update)?;
    println!("{}", attendance::status(Some(&row)).message());

    // file a week of leave starting a month out; today's attendance row does
    // not conflict because it sits outside the requested range
    let start = today + chrono::Duration::days(30);
    let end = start + chrono::Duration::days(6);
    let mods = leave::apply(&login, &employee, &annual, LeaveID::new("leave-1"), start, end, Some("family visit".into()), &vec![], &vec![row], &now)?.into_vec();
    let request = mods[0].clone().expect_op::<Leave>(Op::Create)?;
    println!("leave request for {} working day(s) is {}", request.days(), request.status());

    // an admin picks the request up and approves it; the whole rule chain
    // runs a second time here
    let admin_login = User::builder()
        .id(UserID::new("2ec7af8e-9c3e-4b3e-b1a4-3c52b86ae301"))
        .roles(vec![Role::Admin])
        .email("farhan.ahmed@acme.example")
        .name("Farhan Ahmed")
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build().unwrap();
    let approver = Employee::builder()
        .id(EmployeeID::new("a4a4c5da-59a8-4e7e-9c63-dd6b4e1f3e12"))
        .emp_no("EMP-0001")
        .full_name("Farhan Ahmed")
        .email("farhan.ahmed@acme.example")
        .join_date(NaiveDate::from_ymd_opt(2015, 3, 1).unwrap())
        .company_id(employee.company_id().clone())
        .department_id(employee.department_id().clone())
        .designation_id(DesignationID::new("1f6cf8ae-06f7-4e0e-b5e6-92c3c6b8ab12"))
        .user_id(Some(admin_login.id().clone()))
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build().unwrap();
    let mods = leave::approve(&admin_login, &approver, Some(request), &employee, &annual, &vec![], &vec![], &now)?.into_vec();
    let request = mods[0].clone().expect_op::<Leave>(Op::Update)?;
    println!("leave request is now {}", request.status());

    // and a promotion: the caller must apply both returned modifications in
    // one storage transaction
    let current = employee.designation_id().clone();
    let mods = promotion::record(&admin_login, Some(employee), PromotionID::new("promo-1"), current, senior, today, Some("strong year".into()), &vec![], &now)?.into_vec();
    let recorded = mods[0].clone().expect_op::<Promotion>(Op::Create)?;
    let employee = mods[1].clone().expect_op::<Employee>(Op::Update)?;
    println!("{} promoted effective {}; current designation is now {}", employee.full_name(), recorded.effective_date(), employee.designation_id().as_str());
    Ok(())
}
